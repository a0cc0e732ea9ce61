// Copyright 2026 the Swrender Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row-level fill and blend kernels.
//!
//! The vector kernel composites four pixels per iteration and must stay
//! bit-identical to the scalar arithmetic in [`crate::color`]; both sides
//! share the `(x + 255) >> 8` rounding, and the fallback SIMD level runs
//! the very same code path, so unsupported platforms are scalar by
//! construction. Runs shorter than four pixels, and every tail, go
//! through the scalar loop.

use std::ops::Shr;

use fearless_simd::*;

use crate::color;

/// Unconditional store of one color over a run. No read of the
/// destination.
#[inline(always)]
pub(crate) fn fill_row(dst: &mut [u32], color: u32) {
    dst.fill(color);
}

/// SRC-OVER a single premultiplied source pixel over a run.
///
/// The inverse alpha is uniform across the run, which is what makes the
/// four-lane form profitable: one widen-multiply-narrow per chunk.
pub(crate) fn blend_row_solid(level: Level, dst: &mut [u32], src: u32) {
    dispatch!(level, simd => blend_row_solid_impl(simd, dst, src));
}

#[inline(always)]
fn blend_row_solid_impl<S: Simd>(s: S, dst: &mut [u32], src: u32) {
    let ialpha = 255 - color::alpha(src);

    s.vectorize(
        #[inline(always)]
        || {
            let mut splat = [0_u8; 16];
            for lane in splat.chunks_exact_mut(4) {
                lane.copy_from_slice(&src.to_ne_bytes());
            }
            let src_v = u8x16::from_slice(s, &splat);
            let inv_v = s.widen_u8x16(u8x16::splat(s, ialpha));
            let round = u16x16::splat(s, 255);

            let bytes: &mut [u8] = bytemuck::cast_slice_mut(dst);
            let mut chunks = bytes.chunks_exact_mut(16);
            for chunk in &mut chunks {
                let bg = u8x16::from_slice(s, chunk);
                let kept = s.narrow_u16x16((s.widen_u8x16(bg) * inv_v + round).shr(8));
                let out = kept + src_v;
                chunk.copy_from_slice(out.as_slice());
            }

            let tail: &mut [u32] = bytemuck::cast_slice_mut(chunks.into_remainder());
            for pix in tail {
                *pix = src + color::alpha_mul(*pix, ialpha);
            }
        },
    );
}
