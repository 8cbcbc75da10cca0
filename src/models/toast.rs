use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warn,
    Error,
}

impl Severity {
    /// Clase CSS del toast
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "toast toast--success",
            Severity::Info => "toast toast--info",
            Severity::Warn => "toast toast--warn",
            Severity::Error => "toast toast--error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "✅",
            Severity::Info => "ℹ️",
            Severity::Warn => "⚠️",
            Severity::Error => "❌",
        }
    }
}

/// Notificación transitoria (esquina superior derecha)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Toast {
    pub id: u32,
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    pub life_ms: u32,
}
