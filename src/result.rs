use error_stack::Report;
use ron::error::SpannedError;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(thiserror::Error, Debug)]
pub enum PageTreeErrorKind {
    #[error("General Error: {0}")]
    General(String),
    #[error("Invalid descriptor: {0}")]
    InvalidDescriptor(String),
    #[error("Configuration Error: {0}")]
    Config(String),
    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

#[derive(Debug)]
pub struct PageTreeError(pub Report<PageTreeErrorKind>);

impl Display for PageTreeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl PageTreeError {
    #[track_caller]
    pub fn new(error: PageTreeErrorKind) -> PageTreeError {
        PageTreeError(Report::new(error))
    }

    #[track_caller]
    pub fn change_context<S: Into<String>>(self, message: S) -> Self {
        Self(
            self.0
                .change_context(PageTreeErrorKind::General(message.into())),
        )
    }

    pub fn kind(&self) -> &PageTreeErrorKind {
        self.0.current_context()
    }
}

pub type PageTreeResult<T> = Result<T, PageTreeError>;

impl<T> From<T> for PageTreeError
where
    for<'a> &'a T: Into<PageTreeErrorKind>,
    T: Error + Send + Sync + 'static,
{
    #[track_caller]
    fn from(error: T) -> Self {
        let kind: PageTreeErrorKind = (&error).into();
        let report = Report::new(error);
        let report = report.change_context(kind);
        Self(report)
    }
}

impl From<&serde_json::Error> for PageTreeErrorKind {
    #[track_caller]
    fn from(error: &serde_json::Error) -> Self {
        Self::InvalidDescriptor(format!("JSON Error: {}", error))
    }
}

impl From<&serde_yml::Error> for PageTreeErrorKind {
    #[track_caller]
    fn from(error: &serde_yml::Error) -> Self {
        Self::Config(format!("YAML Error: {}", error))
    }
}

impl From<&SpannedError> for PageTreeErrorKind {
    #[track_caller]
    fn from(error: &SpannedError) -> Self {
        Self::Config(format!("RON Error: {}", error))
    }
}

impl From<&log::SetLoggerError> for PageTreeErrorKind {
    #[track_caller]
    fn from(error: &log::SetLoggerError) -> Self {
        Self::General(format!("Logger Error: {}", error))
    }
}

#[macro_export]
macro_rules! context {
    ($fmt:expr $(, $($args:expr),+)? => $block:block) => {
        {
            $block
        }.map_err(|e: $crate::result::PageTreeError| e.change_context(format!(concat!("Failed to ",$fmt) $(, $($args)+)?)))
    };
}
pub use context;

#[cfg(test)]
mod tests {
    use crate::result::{PageTreeError, PageTreeErrorKind, PageTreeResult};

    #[test]
    fn test_context_macro_ok() {
        let _result = {
            context!("load theme {}", "light" => {
                Ok(0)
            })
        }
        .unwrap();
    }

    #[test]
    fn test_context_macro_err() {
        fn my_broken_function() -> PageTreeResult<u32> {
            Err(PageTreeError::new(PageTreeErrorKind::Config(
                "unloadable".to_string(),
            )))
        }
        let result = {
            context!("load theme {}", "dark" => {
                my_broken_function()
            })
        }
        .expect_err("Should have errored, but was");
        assert_eq!(
            "General Error: Failed to load theme dark",
            result.to_string()
        );
        assert!(format!("{:?}", result).contains("unloadable"));
    }

    #[test]
    fn test_json_error_is_invalid_descriptor() {
        fn parse() -> PageTreeResult<serde_json::Value> {
            Ok(serde_json::from_str("{oops")?)
        }
        let error = parse().unwrap_err();
        assert!(matches!(
            error.kind(),
            PageTreeErrorKind::InvalidDescriptor(_)
        ));
    }
}
