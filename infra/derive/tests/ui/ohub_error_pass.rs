use ohub_derive::ohub_error;
use std::borrow::Cow;

#[ohub_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: DemoError = std::io::Error::other("boom").into();
    let _ = err.to_string();

    let attached: Result<(), DemoError> =
        Err(std::io::Error::other("boom")).context("Reading settings");
    assert!(attached.unwrap_err().to_string().contains("Reading settings"));
}
