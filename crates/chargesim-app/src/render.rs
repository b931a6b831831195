//! Render sink: consumes one snapshot per tick on its own thread.
//!
//! The game loop hands over each finished snapshot by value, so the sink
//! never sees a track mid-tick.

use std::io::Write;
use std::sync::mpsc;
use std::thread::JoinHandle;

use chargesim_core::state::TickSnapshot;

use crate::error::{AppError, AppResult};

pub trait RenderSink: Send {
    fn render(&mut self, snapshot: &TickSnapshot) -> AppResult<()>;
}

/// Writes each snapshot as one line of JSON.
pub struct JsonLinesSink<W> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> RenderSink for JsonLinesSink<W> {
    fn render(&mut self, snapshot: &TickSnapshot) -> AppResult<()> {
        serde_json::to_writer(&mut self.writer, snapshot)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Spawn the render thread. It runs until every sender is dropped or the
/// sink fails, and hands the sink back when done.
pub fn spawn_render_thread<S>(mut sink: S) -> AppResult<(mpsc::Sender<TickSnapshot>, JoinHandle<AppResult<S>>)>
where
    S: RenderSink + 'static,
{
    let (tx, rx) = mpsc::channel::<TickSnapshot>();
    let handle = std::thread::Builder::new()
        .name("chargesim-render".into())
        .spawn(move || {
            for snapshot in rx {
                if let Err(e) = sink.render(&snapshot) {
                    tracing::error!(error = %e, tick = snapshot.time.tick, "render failed");
                    return Err(e);
                }
            }
            Ok(sink)
        })?;
    Ok((tx, handle))
}

/// Join a render thread, surfacing a panic as an error.
pub fn join<S>(handle: JoinHandle<AppResult<S>>) -> AppResult<S> {
    handle.join().map_err(|_| AppError::ThreadPanicked("render"))?
}
