// Copyright 2026 the Swrender Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image blits, with and without affine resampling.
//!
//! The direct paths copy source pixels whose coordinates line up with the
//! destination one to one. The resampling paths run the destination pixel
//! through the inverted transform and pick the nearest source pixel;
//! coordinates that land outside the image are treated as transparent and
//! skipped. Source addressing always uses the image stride, which may be
//! wider than its pixel width.

use crate::color;
use crate::math::{BBox, Matrix};
use crate::span::Rle;
use crate::surface::{Image, MaskImage, MaskMethod, Surface};

/// Nearest-neighbor lookup of the inverse-mapped source position.
#[inline(always)]
fn sample_nearest(image: &Image<'_>, rx: f32, ry: f32) -> Option<u32> {
    let rx = rx.round();
    let ry = ry.round();
    if rx < 0.0 || ry < 0.0 || rx >= image.w as f32 || ry >= image.h as f32 {
        return None;
    }
    Some(image.data[ry as usize * image.stride as usize + rx as usize])
}

/// Direct blit of an opaque, unmasked image.
pub(crate) fn blit_rect(surface: &mut Surface<'_>, image: &Image<'_>, region: &BBox) {
    debug_assert!(region.max.x <= image.w as i32 && region.max.y <= image.h as i32);

    let istride = image.stride as usize;
    for y in region.min.y..region.max.y {
        let base = y as usize * istride;
        let src_row = &image.data[base + region.min.x as usize..base + region.max.x as usize];
        let row = surface.row(y as u32, region.min.x as u32, region.max.x as u32);

        for (dst, &src) in row.iter_mut().zip(src_row) {
            *dst = color::src_over(src, *dst);
        }
    }
}

/// Direct blit with opacity scaling, routed through the bound mask when
/// one modulates.
pub(crate) fn blit_rect_translucent(
    surface: &mut Surface<'_>,
    image: &Image<'_>,
    region: &BBox,
    opacity: u8,
) {
    if let Some(compositor) = surface.compositor {
        match compositor.method {
            MaskMethod::AlphaMask => {
                return blit_rect_masked(surface, image, region, opacity, compositor.image, false);
            }
            MaskMethod::InvAlphaMask => {
                return blit_rect_masked(surface, image, region, opacity, compositor.image, true);
            }
            MaskMethod::ClipPath => {}
        }
    }

    let istride = image.stride as usize;
    for y in region.min.y..region.max.y {
        let base = y as usize * istride;
        let src_row = &image.data[base + region.min.x as usize..base + region.max.x as usize];
        let row = surface.row(y as u32, region.min.x as u32, region.max.x as u32);

        for (dst, &src) in row.iter_mut().zip(src_row) {
            let p = color::alpha_mul(src, opacity);
            *dst = color::src_over(p, *dst);
        }
    }
}

fn blit_rect_masked(
    surface: &mut Surface<'_>,
    image: &Image<'_>,
    region: &BBox,
    opacity: u8,
    mask: MaskImage<'_>,
    inverse: bool,
) {
    log::debug!(
        "image composition with {} mask",
        if inverse { "inverse alpha" } else { "alpha" }
    );

    let istride = image.stride as usize;
    let stride = surface.stride as usize;
    for y in region.min.y..region.max.y {
        let ibase = y as usize * istride;
        let src_row = &image.data[ibase + region.min.x as usize..ibase + region.max.x as usize];
        let mbase = y as usize * stride;
        let mask_row = &mask.data[mbase + region.min.x as usize..mbase + region.max.x as usize];
        let row = surface.row(y as u32, region.min.x as u32, region.max.x as u32);

        for ((dst, &src), &m) in row.iter_mut().zip(src_row).zip(mask_row) {
            let mut a = color::alpha(m);
            if inverse {
                a = 255 - a;
            }
            let p = color::alpha_mul(src, color::mul8(opacity, a));
            *dst = color::src_over(p, *dst);
        }
    }
}

/// Resampled blit of an opaque, unmasked image.
pub(crate) fn sample_rect(
    surface: &mut Surface<'_>,
    image: &Image<'_>,
    region: &BBox,
    inv: &Matrix,
) {
    for y in region.min.y..region.max.y {
        let ey1 = y as f32 * inv.e12 + inv.e13;
        let ey2 = y as f32 * inv.e22 + inv.e23;
        let row = surface.row(y as u32, region.min.x as u32, region.max.x as u32);

        for (i, dst) in row.iter_mut().enumerate() {
            let x = (region.min.x + i as i32) as f32;
            if let Some(src) = sample_nearest(image, x * inv.e11 + ey1, x * inv.e21 + ey2) {
                *dst = color::src_over(src, *dst);
            }
        }
    }
}

/// Resampled blit with opacity scaling, routed through the bound mask
/// when one modulates.
pub(crate) fn sample_rect_translucent(
    surface: &mut Surface<'_>,
    image: &Image<'_>,
    region: &BBox,
    inv: &Matrix,
    opacity: u8,
) {
    if let Some(compositor) = surface.compositor {
        match compositor.method {
            MaskMethod::AlphaMask => {
                return sample_rect_masked(
                    surface, image, region, inv, opacity, compositor.image, false,
                );
            }
            MaskMethod::InvAlphaMask => {
                return sample_rect_masked(
                    surface, image, region, inv, opacity, compositor.image, true,
                );
            }
            MaskMethod::ClipPath => {}
        }
    }

    for y in region.min.y..region.max.y {
        let ey1 = y as f32 * inv.e12 + inv.e13;
        let ey2 = y as f32 * inv.e22 + inv.e23;
        let row = surface.row(y as u32, region.min.x as u32, region.max.x as u32);

        for (i, dst) in row.iter_mut().enumerate() {
            let x = (region.min.x + i as i32) as f32;
            if let Some(src) = sample_nearest(image, x * inv.e11 + ey1, x * inv.e21 + ey2) {
                let p = color::alpha_mul(src, opacity);
                *dst = color::src_over(p, *dst);
            }
        }
    }
}

fn sample_rect_masked(
    surface: &mut Surface<'_>,
    image: &Image<'_>,
    region: &BBox,
    inv: &Matrix,
    opacity: u8,
    mask: MaskImage<'_>,
    inverse: bool,
) {
    log::debug!(
        "transformed image composition with {} mask",
        if inverse { "inverse alpha" } else { "alpha" }
    );

    let stride = surface.stride as usize;
    for y in region.min.y..region.max.y {
        let ey1 = y as f32 * inv.e12 + inv.e13;
        let ey2 = y as f32 * inv.e22 + inv.e23;
        let mbase = y as usize * stride;
        let mask_row = &mask.data[mbase + region.min.x as usize..mbase + region.max.x as usize];
        let row = surface.row(y as u32, region.min.x as u32, region.max.x as u32);

        for ((i, dst), &m) in row.iter_mut().enumerate().zip(mask_row) {
            let x = (region.min.x + i as i32) as f32;
            if let Some(src) = sample_nearest(image, x * inv.e11 + ey1, x * inv.e21 + ey2) {
                let mut a = color::alpha(m);
                if inverse {
                    a = 255 - a;
                }
                let p = color::alpha_mul(src, color::mul8(opacity, a));
                *dst = color::src_over(p, *dst);
            }
        }
    }
}

/// Direct blit restricted to coverage spans; the span coverage folds into
/// the source alpha.
pub(crate) fn blit_rle(surface: &mut Surface<'_>, image: &Image<'_>, rle: &Rle) {
    let istride = image.stride as usize;
    for span in rle.spans() {
        let base = span.y as usize * istride + span.x as usize;
        let src_row = &image.data[base..base + span.len as usize];
        let row = surface.row(span.y, span.x, span.x + span.len);

        for (dst, &src) in row.iter_mut().zip(src_row) {
            let p = color::alpha_mul(src, span.coverage);
            *dst = color::src_over(p, *dst);
        }
    }
}

/// Direct blit over spans with opacity folded into the coverage, routed
/// through the bound mask when one modulates.
pub(crate) fn blit_rle_translucent(
    surface: &mut Surface<'_>,
    image: &Image<'_>,
    rle: &Rle,
    opacity: u8,
) {
    if let Some(compositor) = surface.compositor {
        match compositor.method {
            MaskMethod::AlphaMask => {
                return blit_rle_masked(surface, image, rle, opacity, compositor.image, false);
            }
            MaskMethod::InvAlphaMask => {
                return blit_rle_masked(surface, image, rle, opacity, compositor.image, true);
            }
            MaskMethod::ClipPath => {}
        }
    }

    let istride = image.stride as usize;
    for span in rle.spans() {
        let a = color::mul8(span.coverage, opacity);
        let base = span.y as usize * istride + span.x as usize;
        let src_row = &image.data[base..base + span.len as usize];
        let row = surface.row(span.y, span.x, span.x + span.len);

        for (dst, &src) in row.iter_mut().zip(src_row) {
            let p = color::alpha_mul(src, a);
            *dst = color::src_over(p, *dst);
        }
    }
}

fn blit_rle_masked(
    surface: &mut Surface<'_>,
    image: &Image<'_>,
    rle: &Rle,
    opacity: u8,
    mask: MaskImage<'_>,
    inverse: bool,
) {
    log::debug!(
        "rle image composition with {} mask",
        if inverse { "inverse alpha" } else { "alpha" }
    );

    let istride = image.stride as usize;
    let stride = surface.stride as usize;
    for span in rle.spans() {
        let a = color::mul8(span.coverage, opacity);
        let base = span.y as usize * istride + span.x as usize;
        let src_row = &image.data[base..base + span.len as usize];
        let mbase = span.y as usize * stride + span.x as usize;
        let mask_row = &mask.data[mbase..mbase + span.len as usize];
        let row = surface.row(span.y, span.x, span.x + span.len);

        for ((dst, &src), &m) in row.iter_mut().zip(src_row).zip(mask_row) {
            let mut ma = color::alpha(m);
            if inverse {
                ma = 255 - ma;
            }
            let p = color::alpha_mul(src, color::mul8(a, ma));
            *dst = color::src_over(p, *dst);
        }
    }
}

/// Resampled blit restricted to coverage spans.
pub(crate) fn sample_rle(surface: &mut Surface<'_>, image: &Image<'_>, rle: &Rle, inv: &Matrix) {
    for span in rle.spans() {
        let ey1 = span.y as f32 * inv.e12 + inv.e13;
        let ey2 = span.y as f32 * inv.e22 + inv.e23;
        let row = surface.row(span.y, span.x, span.x + span.len);

        for (i, dst) in row.iter_mut().enumerate() {
            let x = (span.x + i as u32) as f32;
            if let Some(src) = sample_nearest(image, x * inv.e11 + ey1, x * inv.e21 + ey2) {
                let p = color::alpha_mul(src, span.coverage);
                *dst = color::src_over(p, *dst);
            }
        }
    }
}

/// Resampled blit over spans with opacity folded into the coverage,
/// routed through the bound mask when one modulates.
pub(crate) fn sample_rle_translucent(
    surface: &mut Surface<'_>,
    image: &Image<'_>,
    rle: &Rle,
    inv: &Matrix,
    opacity: u8,
) {
    if let Some(compositor) = surface.compositor {
        match compositor.method {
            MaskMethod::AlphaMask => {
                return sample_rle_masked(surface, image, rle, inv, opacity, compositor.image, false);
            }
            MaskMethod::InvAlphaMask => {
                return sample_rle_masked(surface, image, rle, inv, opacity, compositor.image, true);
            }
            MaskMethod::ClipPath => {}
        }
    }

    for span in rle.spans() {
        let a = color::mul8(span.coverage, opacity);
        let ey1 = span.y as f32 * inv.e12 + inv.e13;
        let ey2 = span.y as f32 * inv.e22 + inv.e23;
        let row = surface.row(span.y, span.x, span.x + span.len);

        for (i, dst) in row.iter_mut().enumerate() {
            let x = (span.x + i as u32) as f32;
            if let Some(src) = sample_nearest(image, x * inv.e11 + ey1, x * inv.e21 + ey2) {
                let p = color::alpha_mul(src, a);
                *dst = color::src_over(p, *dst);
            }
        }
    }
}

#[expect(clippy::too_many_arguments, reason = "one slot per dispatch axis")]
fn sample_rle_masked(
    surface: &mut Surface<'_>,
    image: &Image<'_>,
    rle: &Rle,
    inv: &Matrix,
    opacity: u8,
    mask: MaskImage<'_>,
    inverse: bool,
) {
    log::debug!(
        "transformed rle image composition with {} mask",
        if inverse { "inverse alpha" } else { "alpha" }
    );

    let stride = surface.stride as usize;
    for span in rle.spans() {
        let a = color::mul8(span.coverage, opacity);
        let ey1 = span.y as f32 * inv.e12 + inv.e13;
        let ey2 = span.y as f32 * inv.e22 + inv.e23;
        let mbase = span.y as usize * stride + span.x as usize;
        let mask_row = &mask.data[mbase..mbase + span.len as usize];
        let row = surface.row(span.y, span.x, span.x + span.len);

        for ((i, dst), &m) in row.iter_mut().enumerate().zip(mask_row) {
            let x = (span.x + i as u32) as f32;
            if let Some(src) = sample_nearest(image, x * inv.e11 + ey1, x * inv.e21 + ey2) {
                let mut ma = color::alpha(m);
                if inverse {
                    ma = 255 - ma;
                }
                let p = color::alpha_mul(src, color::mul8(a, ma));
                *dst = color::src_over(p, *dst);
            }
        }
    }
}
