use thiserror::Error;

/// Declared failure of the risk check service.
#[derive(Debug, Error)]
pub enum RiskCheckError {
    /// The service could not be reached or did not answer.
    #[error("risk check service unavailable: {reason}")]
    Unavailable { reason: String },

    /// The service answered but refused to evaluate the identity.
    #[error("risk check rejected: {reason}")]
    Rejected { reason: String },
}

impl RiskCheckError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }
}

/// Errors surfaced by the opening and closing decisions.
///
/// Both variants are transparent: the caller sees the collaborator's own
/// message and can downcast to its original type.
#[derive(Debug, Error)]
pub enum DecisionError {
    #[error(transparent)]
    RiskCheck(#[from] RiskCheckError),

    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

impl DecisionError {
    pub fn is_risk_check(&self) -> bool {
        matches!(self, DecisionError::RiskCheck(_))
    }

    /// The declared risk check failure, if that is what this is.
    pub fn as_risk_check(&self) -> Option<&RiskCheckError> {
        match self {
            DecisionError::RiskCheck(err) => Some(err),
            DecisionError::Collaborator(_) => None,
        }
    }
}

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {reason}")]
    Invalid { reason: String },
}
