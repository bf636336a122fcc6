use super::gc::*;
use super::draw::*;
use super::color::*;

use std::collections::vec_deque::*;
use std::sync::*;
use std::pin::*;
use std::mem;

use ::desync::*;
use futures::Stream;
use futures::task::{Context, Poll, Waker};

///
/// Shared state of a canvas: the current drawing plus the streams following it
///
struct CanvasCore {
    /// Everything drawn since the most recent clear, in the order it was written
    drawing_since_last_clear: Vec<Draw>,

    // Streams to forward new instructions to
    pending_streams: Vec<Arc<CanvasStream>>,
}

///
/// A canvas stores drawing instructions rather than pixels. Writers describe what
/// the current frame looks like, and any number of streams replay those
/// instructions for whatever does the actual rendering.
///
pub struct Canvas {
    /// The core is shared with the streams reading from this canvas
    core: Desync<CanvasCore>
}

impl CanvasCore {
    ///
    /// Appends instructions to the stored drawing and forwards them to the streams
    ///
    fn write(&mut self, to_draw: Vec<Draw>) {
        let mut forward         = vec![];
        let mut clear_pending   = false;

        for draw in to_draw {
            if let Draw::ClearCanvas(_) = draw {
                // The stored drawing restarts from the clear, and anything the
                // streams have not read yet is superseded by it
                self.drawing_since_last_clear.clear();
                forward.clear();

                clear_pending = true;
            }

            self.drawing_since_last_clear.push(draw);
            forward.push(draw);
        }

        // Forward to the streams, keeping only those that are still being read
        self.pending_streams.retain(|stream| stream.send_drawing(&forward, clear_pending));
    }
}

impl Canvas {
    ///
    /// Creates an empty canvas
    ///
    pub fn new() -> Canvas {
        // A canvas always starts from a clear
        let core = CanvasCore {
            drawing_since_last_clear:   vec![ Draw::ClearCanvas(Color::Rgba(0.0, 0.0, 0.0, 0.0)) ],
            pending_streams:            vec![ ]
        };

        Canvas {
            core: Desync::new(core)
        }
    }

    ///
    /// Sends some new drawing instructions to this canvas
    ///
    pub fn write(&self, to_draw: Vec<Draw>) {
        // Nothing to schedule if the drawing is empty
        if to_draw.len() != 0 {
            self.core.desync(move |core| core.write(to_draw));
        }
    }

    ///
    /// Draws on this canvas via a graphics context
    ///
    /// Everything the action draws arrives at the canvas as a single batch, so
    /// a stream never observes half a frame.
    ///
    pub fn draw<FnAction>(&self, action: FnAction)
    where FnAction: Send+FnOnce(&mut dyn GraphicsPrimitives) -> () {
        self.core.sync(move |core| {
            let mut graphics_context = CoreContext {
                core:       core,
                pending:    vec![]
            };

            action(&mut graphics_context);
        })
    }

    ///
    /// Opens a stream over the instructions in this canvas
    ///
    /// The stream starts by replaying everything drawn since the last clear,
    /// then follows new instructions as they arrive.
    ///
    pub fn stream(&self) -> Box<dyn Stream<Item=Draw>+Unpin+Send> {
        let new_stream = Arc::new(CanvasStream::new());

        let add_stream = Arc::clone(&new_stream);
        self.core.sync(move |core| {
            // Catch the stream up with the current frame
            add_stream.send_drawing(&core.drawing_since_last_clear, true);

            // Register it so future writes are forwarded too
            core.pending_streams.push(add_stream);
        });

        Box::new(FragileCanvasStream::new(new_stream))
    }

    ///
    /// Retrieves the instructions that make up the current drawing
    ///
    pub fn get_drawing(&self) -> Vec<Draw> {
        self.core.sync(|core| core.drawing_since_last_clear.clone())
    }
}

impl Drop for Canvas {
    fn drop(&mut self) {
        self.core.desync(|core| {
            // Streams finish once they know the canvas has gone away
            core.pending_streams.iter_mut().for_each(|stream| stream.notify_dropped());
        });
    }
}

///
/// Graphics context that batches instructions for a canvas core
///
struct CoreContext<'a> {
    core:       &'a mut CanvasCore,
    pending:    Vec<Draw>
}

impl<'a> GraphicsContext for CoreContext<'a> {
    fn new_path(&mut self)                          { self.pending.push(Draw::NewPath); }
    fn move_to(&mut self, x: f32, y: f32)           { self.pending.push(Draw::Move(x, y)); }
    fn line_to(&mut self, x: f32, y: f32)           { self.pending.push(Draw::Line(x, y)); }

    fn bezier_curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) {
        self.pending.push(Draw::BezierCurve((x1, y1), (x2, y2), (x3, y3)));
    }

    fn close_path(&mut self)                        { self.pending.push(Draw::ClosePath); }
    fn fill(&mut self)                              { self.pending.push(Draw::Fill); }
    fn stroke(&mut self)                            { self.pending.push(Draw::Stroke); }
    fn line_width(&mut self, width: f32)            { self.pending.push(Draw::LineWidth(width)); }
    fn line_width_pixels(&mut self, width: f32)     { self.pending.push(Draw::LineWidthPixels(width)); }
    fn fill_color(&mut self, col: Color)            { self.pending.push(Draw::FillColor(col)); }
    fn stroke_color(&mut self, col: Color)          { self.pending.push(Draw::StrokeColor(col)); }
    fn clear_canvas(&mut self, color: Color)        { self.pending.push(Draw::ClearCanvas(color)); }
    fn canvas_height(&mut self, height: f32)        { self.pending.push(Draw::CanvasHeight(height)); }
    fn center_region(&mut self, minx: f32, miny: f32, maxx: f32, maxy: f32) { self.pending.push(Draw::CenterRegion((minx, miny), (maxx, maxy))); }

    fn draw(&mut self, d: Draw)                     { self.pending.push(d); }
}

impl<'a> GraphicsPrimitives for CoreContext<'a> { }

impl<'a> Drop for CoreContext<'a> {
    fn drop(&mut self) {
        let mut to_draw = vec![];
        mem::swap(&mut self.pending, &mut to_draw);
        self.core.write(to_draw);
    }
}

///
/// State shared between a canvas stream and the canvas feeding it
///
struct CanvasStreamCore {
    /// Instructions waiting to be read from this stream
    queue: VecDeque<Draw>,

    /// The waker for the task reading from this stream, if one is blocked on it
    waiting_task: Option<Waker>,

    /// True once the canvas this stream reads from has gone away
    canvas_dropped: bool,

    /// True once the reader side has gone away
    stream_dropped: bool
}

impl CanvasStreamCore {
    ///
    /// Wakes the reading task, if there is one
    ///
    fn wake(&mut self) {
        if let Some(waker) = self.waiting_task.take() {
            waker.wake();
        }
    }
}

///
/// Reads the instructions in a canvas and follows new ones as they arrive.
/// Instructions that were never read are cut off when a `Draw::ClearCanvas`
/// supersedes them.
///
struct CanvasStream {
    /// State shared with the canvas
    core: Mutex<CanvasStreamCore>
}

impl CanvasStream {
    pub fn new() -> CanvasStream {
        CanvasStream {
            core: Mutex::new(CanvasStreamCore {
                queue:          VecDeque::new(),
                waiting_task:   None,
                canvas_dropped: false,
                stream_dropped: false
            })
        }
    }

    ///
    /// Marks the canvas as gone and wakes the reader so it can finish
    ///
    fn notify_dropped(&self) {
        let mut core = self.core.lock().unwrap();

        core.canvas_dropped = true;
        core.wake();
    }

    ///
    /// Queues drawing instructions on this stream (returning true if this stream wants more)
    ///
    fn send_drawing(&self, drawing: &[Draw], clear_pending: bool) -> bool {
        let mut core = self.core.lock().unwrap();

        if drawing.len() > 0 {
            // Instructions queued before a clear will never be rendered
            if clear_pending {
                core.queue.clear();
            }

            core.queue.extend(drawing.iter().cloned());
            core.wake();
        }

        // The canvas keeps forwarding until the reader goes away
        !core.stream_dropped
    }

    fn poll(&self, context: &mut Context) -> Poll<Option<Draw>> {
        let mut core = self.core.lock().unwrap();

        if let Some(next) = core.queue.pop_front() {
            Poll::Ready(Some(next))
        } else if core.canvas_dropped {
            Poll::Ready(None)
        } else {
            core.waiting_task = Some(context.waker().clone());
            Poll::Pending
        }
    }
}

///
/// The publicly handed out stream type. Dropping it marks the underlying
/// stream as finished with, which is how the canvas knows to stop forwarding
/// instructions to it.
///
struct FragileCanvasStream {
    stream: Arc<CanvasStream>
}

impl FragileCanvasStream {
    pub fn new(stream: Arc<CanvasStream>) -> FragileCanvasStream {
        FragileCanvasStream { stream: stream }
    }
}

impl Drop for FragileCanvasStream {
    fn drop(&mut self) {
        let mut core = self.stream.core.lock().unwrap();

        core.stream_dropped = true;
    }
}

impl Stream for FragileCanvasStream {
    type Item = Draw;

    fn poll_next(self: Pin<&mut Self>, context: &mut Context) -> Poll<Option<Draw>> {
        self.stream.poll(context)
    }
}
