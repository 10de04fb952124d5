/// Advisory message surfaced to the presentation layer.
///
/// At most one alert is live per view model; each operation outcome replaces
/// the previous one. Dismissal (timed or manual) is the display's job, the
/// view models only clear an alert on an explicit dismiss call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind_and_message() {
        assert_eq!(Alert::success("ok").kind, AlertKind::Success);
        assert_eq!(Alert::warning("careful").kind, AlertKind::Warning);
        let err = Alert::error("broke");
        assert_eq!(err.kind, AlertKind::Error);
        assert_eq!(err.message, "broke");
    }
}
