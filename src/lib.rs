// Copyright 2026 the Swrender Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A software rasterization core for 2D vector scenes.
//!
//! `swrender` turns pre-tessellated geometry into pixels: the scene layer
//! hands it a destination [`Surface`], a [`Shape`] carrying either a
//! proven axis-aligned rectangle or run-length coverage spans, and a
//! paint (solid color, baked [`GradientFill`], or [`Image`] with an
//! optional affine [`Matrix`]), and the raster entry points composite
//! with premultiplied SRC-OVER into the caller's 32-bit framebuffer.
//! An optional mask bound to the surface modulates every source before
//! blending.
//!
//! Path flattening, stroke expansion, and anti-aliased coverage
//! generation happen upstream; this crate only consumes their output.
//! Each call runs to completion on the caller's thread, borrows all of
//! its inputs, and retains nothing.
//!
//! ```
//! use swrender::{BBox, ColorSpace, Shape, Surface};
//!
//! let mut buf = vec![0_u32; 4 * 4];
//! let mut surface = Surface::new(&mut buf, 4, 4, 4, ColorSpace::Argb8888).unwrap();
//!
//! swrender::clear(&mut surface).unwrap();
//! let shape = Shape::from_rect(BBox::new(0, 0, 4, 4));
//! swrender::fill_solid(&mut surface, &shape, 255, 0, 0, 255).unwrap();
//!
//! drop(surface);
//! assert!(buf.iter().all(|&pix| pix == 0xffff_0000));
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(clippy::print_stdout, clippy::print_stderr)]
#![expect(
    clippy::cast_possible_truncation,
    reason = "pixel arithmetic narrows u16/u32 intermediates that are known to fit"
)]

mod color;
mod error;
pub mod fill;
pub mod math;
pub mod raster;
mod shape;
mod simd;
pub mod span;
pub mod surface;

pub use error::RasterError;
pub use fearless_simd::Level;
pub use fill::{GradientFill, GradientStop};
pub use math::{BBox, Matrix, Point};
pub use raster::{
    clear, draw_image, fill_gradient, fill_solid, stroke_gradient, stroke_solid,
};
pub use shape::Shape;
pub use span::{Rle, Span};
pub use surface::{ColorSpace, Compositor, Image, MaskImage, MaskMethod, Surface};
