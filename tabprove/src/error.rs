use tableau::szs::{self, NoSuccessKind};

pub struct Error(NoSuccessKind, Option<Box<dyn std::error::Error>>);

impl Error {
    pub fn new(k: NoSuccessKind, e: Box<dyn std::error::Error>) -> Self {
        Self(k, Some(e))
    }

    pub fn get_kind(&self) -> &NoSuccessKind {
        &self.0
    }

    pub fn get_error(&self) -> &Option<Box<dyn std::error::Error>> {
        &self.1
    }
}

impl From<NoSuccessKind> for Error {
    fn from(k: NoSuccessKind) -> Self {
        Self(k, None)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(szs::OsError, e.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::new(szs::OsError, e.into())
    }
}

impl From<tableau::Error> for Error {
    fn from(e: tableau::Error) -> Self {
        use tableau::Error::*;
        let kind = match e {
            EmptySequent => szs::InputError,
            LimitExceeded(_) => szs::Incomplete,
            MissingOperand | InvalidExpansionTarget(_) | NoTableau => szs::Error,
        };
        Self::new(kind, e.to_string().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(e: tableau::Error) -> NoSuccessKind {
        Error::from(e).0
    }

    #[test]
    fn library_errors() {
        assert!(matches!(kind(tableau::Error::LimitExceeded(3)), szs::Incomplete));
        assert!(matches!(kind(tableau::Error::EmptySequent), szs::InputError));
        assert!(matches!(kind(tableau::Error::NoTableau), szs::Error));
        let e = Error::from(tableau::Error::LimitExceeded(3));
        let msg = e.get_error().as_ref().map(|e| e.to_string());
        assert_eq!(msg.as_deref(), Some("no saturation after 3 expansions"));
    }
}
