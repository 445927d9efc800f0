//! Identifier generation strategies for new users.

use serde::Deserialize;
use uuid::Uuid;

/// Produces the identifier for a newly created user.
///
/// Called with the store's write lock held, so `stored` is the exact number
/// of users at the moment of creation.
pub trait IdGenerator: Send + Sync {
    fn generate(&self, stored: usize) -> String;
}

/// Count-based identifiers: `stored + 1` as a decimal string.
///
/// Unique as long as users are never removed, which the store never does.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialIds;

impl IdGenerator for SequentialIds {
    fn generate(&self, stored: usize) -> String {
        (stored + 1).to_string()
    }
}

/// Random v4 UUID identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn generate(&self, _stored: usize) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Identifier strategy selected in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    #[default]
    Sequential,
    Uuid,
}

impl IdStrategy {
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Sequential => Box::new(SequentialIds),
            IdStrategy::Uuid => Box::new(UuidIds),
        }
    }
}

impl std::fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdStrategy::Sequential => write!(f, "sequential"),
            IdStrategy::Uuid => write!(f, "uuid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_is_count_plus_one() {
        assert_eq!(SequentialIds.generate(0), "1");
        assert_eq!(SequentialIds.generate(2), "3");
    }

    #[test]
    fn test_uuid_ids_differ() {
        let a = UuidIds.generate(0);
        let b = UuidIds.generate(0);
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_strategy_from_config_value() {
        let strategy: IdStrategy = serde_json::from_str(r#""uuid""#).unwrap();
        assert_eq!(strategy, IdStrategy::Uuid);
        assert_eq!(IdStrategy::default(), IdStrategy::Sequential);
        assert_eq!(IdStrategy::Sequential.generator().generate(4), "5");
    }
}
