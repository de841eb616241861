//! The Elm-architecture application loop: [`Model`], [`Driver`], [`Effect`],
//! [`App`].

use std::error::Error;
use std::sync::mpsc::{self, Receiver, Sender};

use twenty48_core::Point;

use crate::canvas::{Canvas, Frame, compute_frame};
use crate::messages::Msg;
use crate::style::Cell;

/// A side-effect returned by [`Model::update`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Stop the application loop.
    End,
}

/// The application model (Elm architecture).
pub trait Model {
    /// Process a message, optionally returning a side-effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state. The canvas is blank on entry.
    fn draw(&self, canvas: &mut Canvas);
}

/// Back-end driver (terminal, test harness).
pub trait Driver {
    /// Initialise the back-end.
    fn init(&mut self) -> Result<(), Box<dyn Error>>;

    /// Current screen size, if the back-end knows it.
    fn size(&self) -> Option<Point> {
        None
    }

    /// Wait briefly for input and send any messages through `tx`.
    fn poll_msgs(&mut self, tx: &Sender<Msg>) -> Result<(), Box<dyn Error>>;

    /// Paint the changed cells.
    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn Error>>;

    /// Restore the screen. Called once, also after errors.
    fn close(&mut self);
}

/// Configuration for creating an [`App`].
pub struct AppConfig<M: Model, D: Driver> {
    pub model: M,
    pub driver: D,
    /// Canvas size used when the driver cannot report one.
    pub width: i32,
    pub height: i32,
}

/// The main application runner.
pub struct App<M: Model, D: Driver> {
    model: M,
    driver: D,
    /// What the screen currently shows.
    prev: Canvas,
    curr: Canvas,
}

impl<M: Model, D: Driver> App<M, D> {
    pub fn new(config: AppConfig<M, D>) -> Self {
        Self {
            model: config.model,
            driver: config.driver,
            prev: Canvas::new(config.width, config.height),
            curr: Canvas::new(config.width, config.height),
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Run the Model-View-Update loop until the model returns
    /// [`Effect::End`] or the driver sends [`Msg::Quit`].
    ///
    /// 1. Initialises the driver and sends `Msg::Init` to the model.
    /// 2. Loops: process queued messages → draw → diff → flush → poll.
    /// 3. Closes the driver, whether the loop ended normally or not.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        if let Err(e) = self.driver.init() {
            self.driver.close();
            return Err(e);
        }
        if let Some(size) = self.driver.size() {
            self.resize(size.x, size.y);
        }
        let result = self.event_loop();
        self.driver.close();
        result
    }

    fn event_loop(&mut self) -> Result<(), Box<dyn Error>> {
        let (tx, rx): (Sender<Msg>, Receiver<Msg>) = mpsc::channel();
        tx.send(Msg::Init).ok();
        loop {
            if self.process_pending(&rx)? {
                return Ok(());
            }
            self.driver.poll_msgs(&tx)?;
        }
    }

    /// Drain queued messages, then redraw once. Returns `true` to stop.
    fn process_pending(&mut self, rx: &Receiver<Msg>) -> Result<bool, Box<dyn Error>> {
        let mut needs_draw = false;
        while let Ok(msg) = rx.try_recv() {
            let quit = msg == Msg::Quit;
            if let Msg::Screen { width, height } = msg {
                self.resize(width, height);
            }
            let effect = self.model.update(msg);
            if quit || effect == Some(Effect::End) {
                log::debug!("application loop stopping");
                return Ok(true);
            }
            needs_draw = true;
        }
        if needs_draw {
            self.redraw()?;
        }
        Ok(false)
    }

    fn redraw(&mut self) -> Result<(), Box<dyn Error>> {
        self.curr.fill(Cell::default());
        self.model.draw(&mut self.curr);
        let frame = compute_frame(&self.prev, &self.curr);
        if !frame.is_empty() {
            self.driver.flush(frame)?;
        }
        self.prev.clone_from(&self.curr);
        Ok(())
    }

    /// New canvas size. The screen content is unknown afterwards, so the
    /// next frame repaints everything.
    fn resize(&mut self, width: i32, height: i32) {
        log::debug!("canvas resized to {width}x{height}");
        self.curr = Canvas::new(width, height);
        self.prev = Canvas::new(0, 0);
    }
}
