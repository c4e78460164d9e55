//! Outcome of a set of fetches started together.
//!
//! Pages start every fetch of a load cycle at once, wait for all of them, and
//! feed each result through [`BatchReport::take`]. The report remembers which
//! named fetch failed, and [`BatchPolicy`] decides whether the successful
//! results may still be applied.

use api::ApiError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BatchPolicy {
    /// Any failure discards the whole batch; the page keeps its previous data.
    #[default]
    AllOrNothing,
    /// Successful fetches are applied even if others failed.
    Partial,
}

#[derive(Debug)]
pub struct Failure {
    pub name: &'static str,
    pub error: ApiError,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    failures: Vec<Failure>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the result of the fetch called `name`, returning its value on success.
    pub fn take<T>(&mut self, name: &'static str, result: Result<T, ApiError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!("fetch {} failed: {}", name, error);
                self.failures.push(Failure { name, error });
                None
            }
        }
    }

    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn failed(&self, name: &str) -> bool {
        self.failures.iter().any(|f| f.name == name)
    }

    /// Whether results may be applied under `policy`.
    pub fn commit(&self, policy: BatchPolicy) -> bool {
        match policy {
            BatchPolicy::AllOrNothing => self.is_ok(),
            BatchPolicy::Partial => true,
        }
    }

    /// One line naming the failed fetches, or `None` if all succeeded.
    pub fn summary(&self) -> Option<String> {
        if self.is_ok() {
            return None;
        }
        let names: Vec<&str> = self.failures.iter().map(|f| f.name).collect();
        Some(format!("Failed to load {}", names.join(", ")))
    }
}
