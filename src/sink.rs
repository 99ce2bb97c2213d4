use crate::api::CollisionSink;
use crate::types::BoxId;

impl<F> CollisionSink for F
where
    F: FnMut(&str, &str),
{
    fn report(&mut self, a: &str, b: &str) {
        self(a, b)
    }
}

/// Collects reported pairs.
impl CollisionSink for Vec<(BoxId, BoxId)> {
    fn report(&mut self, a: &str, b: &str) {
        self.push((a.to_owned(), b.to_owned()));
    }
}

/// Logs each report at info level.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogSink;

impl CollisionSink for LogSink {
    fn report(&mut self, a: &str, b: &str) {
        log::info!("Collision detected between {} and {}", a, b);
    }
}
