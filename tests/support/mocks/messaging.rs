// tests/support/mocks/messaging.rs
use async_trait::async_trait;
use documan::application::{
    ApplicationResult, dto::AuthorDeletionMessage, error::ApplicationError,
    ports::messaging::AuthorDeletionPublisher,
};
use std::sync::{
    Mutex,
    atomic::{AtomicBool, Ordering},
};

/// 公開されたメッセージを記録するだけのパブリッシャ
#[derive(Default)]
pub struct RecordingPublisher {
    messages: Mutex<Vec<AuthorDeletionMessage>>,
    unavailable: AtomicBool,
}

impl RecordingPublisher {
    /// 以降の publish をインフラ障害として失敗させる
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn published(&self) -> Vec<AuthorDeletionMessage> {
        self.messages.lock().unwrap().clone()
    }

    /// 記録済みメッセージを取り出してキューを空にする
    pub fn drain(&self) -> Vec<AuthorDeletionMessage> {
        std::mem::take(&mut *self.messages.lock().unwrap())
    }
}

#[async_trait]
impl AuthorDeletionPublisher for RecordingPublisher {
    async fn publish(&self, message: &AuthorDeletionMessage) -> ApplicationResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ApplicationError::infrastructure("redis: connection refused"));
        }
        self.messages.lock().unwrap().push(message.clone());
        Ok(())
    }
}
