use ohub_derive::ohub_error;
use std::borrow::Cow;

#[ohub_error]
pub enum DemoError {
    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let from_str: DemoError = "static fault".into();
    let from_string: DemoError = String::from("owned fault").into();
    assert!(from_str.to_string().contains("static fault"));
    assert!(from_string.to_string().contains("owned fault"));
}
