//! Single-method callable abstraction

/// Something that accepts a line of text and returns nothing
///
/// Every `FnMut(&str)` closure or function item is a `StringConsumer`, so
/// callers can pass a lambda wherever the named capability is expected.
pub trait StringConsumer {
    fn accept(&mut self, s: &str);
}

impl<F> StringConsumer for F
where
    F: FnMut(&str),
{
    fn accept(&mut self, s: &str) {
        self(s)
    }
}

/// Consumer that prints each line to stdout
pub fn printer() -> impl StringConsumer {
    |s: &str| println!("{s}")
}
