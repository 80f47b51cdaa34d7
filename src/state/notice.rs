use crate::infra::config::UI;

/// A blocking message the user has to dismiss
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Name or complaint left empty; nothing was sent
    Validation,
    /// The request failed for any reason
    Connectivity,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::Validation => &UI.notices.validation,
            Notice::Connectivity => &UI.notices.connectivity,
        }
    }
}
