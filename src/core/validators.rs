use regex::Regex;

pub type Validator = Box<dyn Fn(&str) -> Result<(), String> + Send>;

/// Local part, domain, then a 2-4 letter final label.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$";

pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address";

pub fn required(message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if value.trim().is_empty() {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

pub fn pattern(pattern: &str, message: impl Into<String>) -> Validator {
    let re = Regex::new(pattern).expect("Invalid regex pattern");
    let message = message.into();
    Box::new(move |value: &str| {
        if re.is_match(value) {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}

pub fn email() -> Validator {
    pattern(EMAIL_PATTERN, INVALID_EMAIL_MESSAGE)
}

/// Passes empty values through so required-ness stays the concern of
/// `required()`.
pub fn one_of(options: Vec<String>, message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if value.trim().is_empty() || options.iter().any(|opt| opt == value) {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}

pub fn custom<F>(f: F, message: impl Into<String>) -> Validator
where
    F: Fn(&str) -> bool + Send + 'static,
{
    let msg = message.into();
    Box::new(move |value: &str| if f(value) { Ok(()) } else { Err(msg.clone()) })
}
