//! Runtime setup for CLI commands.

/// Rayon thread stack size (16MB for deeply nested syntax trees)
const RAYON_STACK_SIZE: usize = 16 * 1024 * 1024;

/// Main thread stack size (16MB, enough to lower and walk the deepest accepted tree)
pub const MAIN_STACK_SIZE: usize = 16 * 1024 * 1024;

/// Run `f` on a thread with [`MAIN_STACK_SIZE`] and return its result.
pub fn run_with_main_stack<T, F>(f: F) -> anyhow::Result<T>
where
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    std::thread::Builder::new()
        .name("smellblock-main".to_string())
        .stack_size(MAIN_STACK_SIZE)
        .spawn(f)?
        .join()
        .map_err(|_| anyhow::anyhow!("main worker thread panicked"))?
}

/// Configure rayon global thread pool once at startup
pub fn configure_thread_pool(jobs: usize) {
    let mut builder = rayon::ThreadPoolBuilder::new().stack_size(RAYON_STACK_SIZE);

    if jobs > 0 {
        builder = builder.num_threads(jobs);
    }

    if let Err(e) = builder.build_global() {
        // Already configured - this is fine, just ignore
        tracing::debug!("Thread pool already configured: {}", e);
    }
}

/// Get the number of worker threads to use
pub fn get_worker_count(jobs: usize) -> usize {
    if jobs == 0 {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4)
    } else {
        jobs
    }
}
