/// Blocking user prompts, the way a page would use `alert` and `confirm`.
pub trait Notifier {
    fn alert(&self, message: &str);

    fn confirm(&self, message: &str) -> bool;
}
