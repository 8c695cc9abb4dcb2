/// Whatever actually cycles through the URLs. The form only hands over the
/// validated list and the interval in milliseconds.
pub trait LoopStarter {
    fn start_loop(&mut self, urls: Vec<String>, interval_ms: u64);
}

impl<F> LoopStarter for F
where
    F: FnMut(Vec<String>, u64),
{
    fn start_loop(&mut self, urls: Vec<String>, interval_ms: u64) {
        self(urls, interval_ms)
    }
}
