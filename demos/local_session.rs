//!
//! Drives an editing session from the command line: applies a few operations
//! and prints the vertices after each one, while a canvas stream follows the
//! drawing instructions from another thread.
//!

use hex_affine::*;
use hex_transform::*;
use hex_canvas::*;

use futures::executor;

use std::thread;

fn main() {
    pretty_env_logger::init();

    let mut session = AffineSession::new();

    // Follow the canvas from another thread, counting what arrives
    let drawing     = session.canvas().stream();
    let follower    = thread::spawn(move || {
        let mut stream          = executor::block_on_stream(drawing);
        let mut frames          = 0;
        let mut instructions    = 0;

        while let Some(draw) = stream.next() {
            if let Draw::ClearCanvas(_) = draw {
                frames += 1;
            }

            instructions += 1;
        }

        (frames, instructions)
    });

    println!("Original:  {}", shape_json(session.shape()));

    let steps = vec![
        TransformOp::Translate { dx: 10.0, dy: -5.0 },
        TransformOp::Rotate { angle: 45.0, cx: 350.0, cy: 200.0 },
        TransformOp::Scale { kx: 1.5, ky: 1.5, cx: 350.0, cy: 200.0 }
    ];

    for op in steps {
        match session.apply(&op) {
            Ok(shape)   => println!("{:?} -> {}", op, shape_json(shape)),
            Err(err)    => println!("{:?} rejected: {}", op, err)
        }
    }

    println!("Reset:     {}", shape_json(session.reset()));

    // Dropping the session drops its canvas, which ends the stream
    drop(session);

    if let Ok((frames, instructions)) = follower.join() {
        println!("Canvas stream delivered {} instructions over {} frames", instructions, frames);
    }
}

fn shape_json(shape: &Shape) -> String {
    serde_json::to_string(shape).unwrap_or_else(|_| String::from("<unprintable>"))
}
