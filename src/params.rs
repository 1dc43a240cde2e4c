use crate::{AwqlError, Result, Value};

const PLACEHOLDER: char = '?';

/// Positional arguments for a statement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params(pub Vec<Value>);

impl Params {
    pub fn positional(values: impl Into<Vec<Value>>) -> Self {
        Self(values.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<()> for Params {
    fn from(_: ()) -> Self {
        Self::default()
    }
}

impl From<Vec<Value>> for Params {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl<const N: usize> From<[Value; N]> for Params {
    fn from(values: [Value; N]) -> Self {
        Self(values.into())
    }
}

/// Number of `?` placeholders in `query`.
pub fn count_placeholders(query: &str) -> usize {
    query.matches(PLACEHOLDER).count()
}

/// Replaces every `?` in `query`, left to right, with the quoted literal of
/// the matching argument.
///
/// Fails without touching the query when the argument count differs from the
/// placeholder count.
pub fn bind(query: &str, params: &Params) -> Result<String> {
    let expected = count_placeholders(query);
    if params.len() != expected {
        return Err(AwqlError::BindingMismatch {
            expected,
            actual: params.len(),
        });
    }

    let mut values = params.0.iter();
    let mut bound = String::with_capacity(query.len());
    for ch in query.chars() {
        if ch == PLACEHOLDER {
            if let Some(value) = values.next() {
                bound.push_str(&value.to_literal());
                continue;
            }
        }
        bound.push(ch);
    }
    Ok(bound)
}
