//! Defines the scurry runtime task runner.
use std::future::Future;

use parking_lot::Mutex;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::sync::OnceCell;
use tokio::task;
use tokio::task::JoinHandle;

use crate::errors::{Error, RuntimeError, Unknown};

/// Handler for a spawned task (a runner frame loop, a staggered spawn, an event callback).
/// Aborting the handler is how a run is cancelled: the future is simply never polled again.
pub type TaskHandler = JoinHandle<Result<(), Error>>;

/// Outcome of a finished task, as reported to the runtime.
///
/// Futures handed to [`run`] may return either `()` or `Result<(), Error>` for flexibility; both
/// convert into a `TaskResult` before being sent back.
pub enum TaskResult {
    Ok,
    Err(Error),
}

impl From<()> for TaskResult {
    fn from(_: ()) -> Self {
        TaskResult::Ok
    }
}

impl From<Result<(), Error>> for TaskResult {
    fn from(result: Result<(), Error>) -> Self {
        match result {
            Ok(_) => TaskResult::Ok,
            Err(e) => TaskResult::Err(e),
        }
    }
}

/// Channel through which spawned tasks report back to the `#[scurry::runtime]` entry point
/// (not initialised until the runtime starts).
pub static TASK_TX: OnceCell<Mutex<Option<UnboundedSender<UnboundedReceiver<TaskResult>>>>> =
    OnceCell::const_new();
pub static TASK_RX: OnceCell<Mutex<Option<UnboundedReceiver<UnboundedReceiver<TaskResult>>>>> =
    OnceCell::const_new();

/// Initialises the task channel pair, once.
///
/// Called by the `#[scurry::runtime]` macro before anything else runs; calling it again is a
/// no-op.
pub async fn init_task_channel() {
    TASK_RX
        .get_or_init(|| async {
            let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<UnboundedReceiver<TaskResult>>();

            TASK_TX.get_or_init(|| async { Mutex::new(Some(tx)) }).await;

            Mutex::new(Some(rx))
        })
        .await;
}

/// Spawns the given future as a tokio task the runtime will wait for.
///
/// The entry point marked by `#[scurry::runtime]` blocks until every task spawned through this
/// function is done: a sequence can therefore fire-and-forget its staggered runners and still
/// have the program outlive them.
///
/// # Errors
/// Returns an error when called outside a running `#[scurry::runtime]`, or if the task channel
/// is gone.
///
/// # Example
/// ```ignore
/// #[scurry::runtime]
/// async fn main() {
///     task::run(async move {
///         // whatever
///     }).unwrap();
/// }
/// ```
pub fn run<F, T>(future: F) -> Result<TaskHandler, Error>
where
    F: Future<Output = T> + Send + 'static,
    T: Into<TaskResult> + Send + 'static,
{
    // Each task gets its own result channel: the sending half travels with the future, the
    // receiving half is handed to the runtime so it knows to wait for this particular task.
    let (report, outcome) = tokio::sync::mpsc::unbounded_channel();

    let handler = task::spawn(async move {
        let result = future.await.into();
        report.send(result).map_err(|err| Unknown {
            info: err.to_string(),
        })?;
        Ok(())
    });

    let cell = TASK_TX.get().ok_or(RuntimeError)?;
    let mut lock = cell.lock();
    let tx = lock.as_mut().ok_or(RuntimeError)?;

    tx.send(outcome).map_err(|err| Unknown {
        info: err.to_string(),
    })?;

    Ok(handler)
}

#[macro_export]
macro_rules! pause {
    ($ms:expr) => {
        tokio::time::sleep(tokio::time::Duration::from_millis($ms as u64)).await
    };
}

#[macro_export]
macro_rules! pause_sync {
    ($ms:expr) => {
        std::thread::sleep(std::time::Duration::from_millis($ms as u64))
    };
}
