use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use super::{GenerationError, Generator};

/// Wraps a `Generator` with a per-call deadline.
/// On expiry the inner call is dropped and `GenerationError::Timeout` is returned.
pub struct Deadline<G> {
    inner: G,
    limit: Duration,
}

impl<G> Deadline<G> {
    pub fn new(inner: G, limit: Duration) -> Self {
        Self { inner, limit }
    }
}

#[async_trait]
impl<G: Generator> Generator for Deadline<G> {
    async fn generate(&self, content: &str, instruction: &str) -> Result<String, GenerationError> {
        match tokio::time::timeout(self.limit, self.inner.generate(content, instruction)).await {
            Ok(result) => result,
            Err(_) => {
                warn!("Generation exceeded deadline of {}ms", self.limit.as_millis());
                Err(GenerationError::Timeout(self.limit))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sleepy(Duration);

    #[async_trait]
    impl Generator for Sleepy {
        async fn generate(&self, content: &str, _instruction: &str) -> Result<String, GenerationError> {
            tokio::time::sleep(self.0).await;
            Ok(content.to_string())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_call_passes_through() {
        let generator = Deadline::new(Sleepy(Duration::from_secs(1)), Duration::from_secs(5));
        let out = generator.generate("done", "inst").await.unwrap();
        assert_eq!(out, "done");
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_call_times_out() {
        let generator = Deadline::new(Sleepy(Duration::from_secs(30)), Duration::from_secs(5));
        let err = generator.generate("late", "inst").await.unwrap_err();
        match err {
            GenerationError::Timeout(limit) => assert_eq!(limit, Duration::from_secs(5)),
            other => panic!("expected Timeout, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_inner_error_is_unchanged() {
        struct Failing;

        #[async_trait]
        impl Generator for Failing {
            async fn generate(&self, _: &str, _: &str) -> Result<String, GenerationError> {
                Err(GenerationError::Api {
                    status: 503,
                    message: "overloaded".to_string(),
                })
            }
        }

        let err = Deadline::new(Failing, Duration::from_secs(5))
            .generate("x", "y")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "API error (status 503): overloaded");
    }
}
