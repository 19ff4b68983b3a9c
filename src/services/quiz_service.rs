use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::{Error, Result};
use crate::models::answer::Likert;
use crate::models::question::QUESTION_COUNT;
use crate::models::quiz::QuizModel;
use crate::services::storage_service::StorageService;

/// The single quiz session: the model plus its persistence adapter.
///
/// Every mutation is written through to storage before the lock is released.
#[derive(Clone)]
pub struct QuizService {
    model: Arc<Mutex<QuizModel>>,
    storage: StorageService,
}

impl QuizService {
    pub fn load(storage: StorageService) -> Self {
        let answers = storage.load_answers();
        let model = QuizModel::from_answers(answers);
        tracing::info!(
            key = %storage.key(),
            answered = model.answered_count(),
            "Quiz session restored"
        );
        Self {
            model: Arc::new(Mutex::new(model)),
            storage,
        }
    }

    pub async fn snapshot(&self) -> QuizModel {
        *self.model.lock().await
    }

    pub async fn set_answer(&self, index: usize, value: Likert) -> Result<QuizModel> {
        if index >= QUESTION_COUNT {
            return Err(Error::BadRequest(format!(
                "Question index {} out of range (0..{})",
                index, QUESTION_COUNT
            )));
        }
        let mut model = self.model.lock().await;
        let was_complete = model.is_complete();
        model.set_answer(index, value);
        self.storage.save_answers(model.answers());
        if model.is_complete() && !was_complete {
            tracing::info!(score = model.score(), "Quiz completed");
        }
        Ok(*model)
    }

    pub async fn reset(&self) -> QuizModel {
        let mut model = self.model.lock().await;
        model.reset();
        self.storage.save_answers(model.answers());
        tracing::info!("Quiz reset");
        *model
    }

    /// Snapshot of a completed quiz, or `Error::Incomplete` while slots remain empty.
    pub async fn completed(&self) -> Result<QuizModel> {
        let model = self.snapshot().await;
        if model.is_complete() {
            Ok(model)
        } else {
            Err(Error::Incomplete(format!(
                "{} of {} questions answered",
                model.answered_count(),
                QUESTION_COUNT
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::answer::AnswerSet;
    use crate::services::storage_service::{KeyValueStore, MemoryStore, MockKeyValueStore};

    fn likert(v: u8) -> Likert {
        Likert::new(v).unwrap()
    }

    fn memory_storage() -> (Arc<MemoryStore>, StorageService) {
        let store = Arc::new(MemoryStore::new());
        let storage = StorageService::new(store.clone(), "quiz");
        (store, storage)
    }

    #[tokio::test]
    async fn answers_are_written_through() {
        let (store, storage) = memory_storage();
        let service = QuizService::load(storage);

        service.set_answer(1, likert(4)).await.unwrap();
        assert_eq!(
            store.get_item("quiz").unwrap().as_deref(),
            Some("[null,4,null,null,null]")
        );

        service.reset().await;
        assert_eq!(
            store.get_item("quiz").unwrap().as_deref(),
            Some("[null,null,null,null,null]")
        );
    }

    #[tokio::test]
    async fn reload_restores_previous_session() {
        let (store, storage) = memory_storage();
        let first = QuizService::load(storage);
        for (idx, v) in [3, 4, 2, 5, 1].into_iter().enumerate() {
            first.set_answer(idx, likert(v)).await.unwrap();
        }

        let second = QuizService::load(StorageService::new(store, "quiz"));
        let model = second.snapshot().await;
        assert!(model.is_complete());
        assert_eq!(model.score(), 15);
    }

    #[tokio::test]
    async fn out_of_range_index_is_rejected() {
        let (_, storage) = memory_storage();
        let service = QuizService::load(storage);
        let err = service.set_answer(QUESTION_COUNT, likert(3)).await.unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
        assert_eq!(service.snapshot().await.answered_count(), 0);
    }

    #[tokio::test]
    async fn completed_requires_every_slot() {
        let (_, storage) = memory_storage();
        let service = QuizService::load(storage);
        for idx in 0..QUESTION_COUNT - 1 {
            service.set_answer(idx, likert(5)).await.unwrap();
        }
        assert!(matches!(service.completed().await, Err(Error::Incomplete(_))));

        service.set_answer(QUESTION_COUNT - 1, likert(5)).await.unwrap();
        let model = service.completed().await.unwrap();
        assert_eq!(model.score(), 25);

        service.reset().await;
        assert!(service.completed().await.is_err());
        assert_eq!(*service.snapshot().await.answers(), AnswerSet::empty());
    }

    #[tokio::test]
    async fn storage_outage_does_not_affect_the_session() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get_item()
            .returning(|_| Err(Error::Storage("unavailable".to_string())));
        store
            .expect_set_item()
            .returning(|_, _| Err(Error::Storage("unavailable".to_string())));

        let service = QuizService::load(StorageService::new(Arc::new(store), "quiz"));
        let model = service.set_answer(0, likert(2)).await.unwrap();
        assert_eq!(model.score(), 2);
        assert_eq!(service.snapshot().await.answered_count(), 1);
    }
}
