// Copyright 2026 the Swrender Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mask compositor behavior for rect and span fills.

mod common;

use swrender::{fill_solid, stroke_solid};
use swrender::{
    BBox, ColorSpace, Compositor, MaskImage, MaskMethod, Rle, Shape, Span, Surface,
};

const W: u32 = 4;
const H: u32 = 2;

fn mask_image(data: &[u32]) -> MaskImage<'_> {
    MaskImage {
        data,
        w: W,
        h: H,
        stride: W,
    }
}

#[test]
fn alpha_mask_halves() {
    // Mask alpha is 0 on the left half, 255 on the right half.
    let mask: Vec<u32> = (0..W * H)
        .map(|i| if i % W < W / 2 { 0 } else { 0xff00_0000 })
        .collect();

    let mut buf = vec![0xff00_0000_u32; (W * H) as usize];
    let mut surface = Surface::new(&mut buf, W, H, W, ColorSpace::Argb8888).unwrap();
    surface.set_compositor(Some(Compositor {
        method: MaskMethod::AlphaMask,
        image: mask_image(&mask),
    }));

    let shape = Shape::from_rect(BBox::new(0, 0, W as i32, H as i32));
    fill_solid(&mut surface, &shape, 255, 0, 0, 255).unwrap();

    drop(surface);
    for (i, &pix) in buf.iter().enumerate() {
        if i as u32 % W < W / 2 {
            assert_eq!(pix, 0xff00_0000, "masked-out pixel {i} must stay black");
        } else {
            assert_eq!(pix, 0xffff_0000, "masked-in pixel {i} must turn red");
        }
    }
}

#[test]
fn full_alpha_mask_equals_no_mask() {
    let mask = vec![0xffab_cdef_u32; (W * H) as usize];
    let shape = Shape::from_rect(BBox::new(0, 0, W as i32, H as i32));

    let mut masked = vec![0xff33_6699_u32; (W * H) as usize];
    let mut surface = Surface::new(&mut masked, W, H, W, ColorSpace::Argb8888).unwrap();
    surface.set_compositor(Some(Compositor {
        method: MaskMethod::AlphaMask,
        image: mask_image(&mask),
    }));
    fill_solid(&mut surface, &shape, 20, 40, 60, 128).unwrap();
    drop(surface);

    let mut plain = vec![0xff33_6699_u32; (W * H) as usize];
    let mut surface = Surface::new(&mut plain, W, H, W, ColorSpace::Argb8888).unwrap();
    fill_solid(&mut surface, &shape, 20, 40, 60, 128).unwrap();
    drop(surface);

    assert_eq!(masked, plain);
}

#[test]
fn zero_inverse_mask_equals_no_mask() {
    let mask = vec![0x00ff_ffff_u32; (W * H) as usize];
    let shape = Shape::from_rect(BBox::new(0, 0, W as i32, H as i32));

    let mut masked = vec![0_u32; (W * H) as usize];
    let mut surface = Surface::new(&mut masked, W, H, W, ColorSpace::Argb8888).unwrap();
    surface.set_compositor(Some(Compositor {
        method: MaskMethod::InvAlphaMask,
        image: mask_image(&mask),
    }));
    fill_solid(&mut surface, &shape, 200, 100, 50, 255).unwrap();
    drop(surface);

    let mut plain = vec![0_u32; (W * H) as usize];
    let mut surface = Surface::new(&mut plain, W, H, W, ColorSpace::Argb8888).unwrap();
    fill_solid(&mut surface, &shape, 200, 100, 50, 255).unwrap();
    drop(surface);

    assert_eq!(masked, plain);
}

#[test]
fn opaque_inverse_mask_keeps_destination() {
    let mask = vec![0xff00_0000_u32; (W * H) as usize];

    let mut buf = vec![0xff17_2a3b_u32; (W * H) as usize];
    let mut surface = Surface::new(&mut buf, W, H, W, ColorSpace::Argb8888).unwrap();
    surface.set_compositor(Some(Compositor {
        method: MaskMethod::InvAlphaMask,
        image: mask_image(&mask),
    }));

    let shape = Shape::from_rect(BBox::new(0, 0, W as i32, H as i32));
    fill_solid(&mut surface, &shape, 255, 255, 255, 255).unwrap();

    drop(surface);
    assert!(buf.iter().all(|&pix| pix == 0xff17_2a3b));
}

#[test]
fn masked_spans_modulate_per_pixel() {
    let mask: Vec<u32> = (0..W * H)
        .map(|i| if i % W < W / 2 { 0 } else { 0xff00_0000 })
        .collect();

    let mut buf = vec![0_u32; (W * H) as usize];
    let mut surface = Surface::new(&mut buf, W, H, W, ColorSpace::Argb8888).unwrap();
    surface.set_compositor(Some(Compositor {
        method: MaskMethod::AlphaMask,
        image: mask_image(&mask),
    }));

    let rle = Rle::new(vec![Span::new(0, 0, W, 255), Span::new(0, 1, W, 128)]);
    fill_solid(&mut surface, &Shape::from_rle(&rle), 0, 255, 0, 255).unwrap();

    drop(surface);
    let half = common::alpha_mul(0xff00_ff00, 128);
    assert_eq!(&buf[..W as usize], &[0, 0, 0xff00_ff00, 0xff00_ff00]);
    assert_eq!(&buf[W as usize..], &[0, 0, half, half]);
}

#[test]
fn masked_stroke() {
    let mask: Vec<u32> = (0..W * H)
        .map(|i| if i % W < W / 2 { 0 } else { 0xff00_0000 })
        .collect();

    let mut buf = vec![0_u32; (W * H) as usize];
    let mut surface = Surface::new(&mut buf, W, H, W, ColorSpace::Argb8888).unwrap();
    surface.set_compositor(Some(Compositor {
        method: MaskMethod::AlphaMask,
        image: mask_image(&mask),
    }));

    let stroke = Rle::new(vec![Span::new(0, 0, W, 255)]);
    let shape = Shape::default().with_stroke(&stroke);
    stroke_solid(&mut surface, &shape, 255, 0, 0, 255).unwrap();

    drop(surface);
    assert_eq!(&buf[..W as usize], &[0, 0, 0xffff_0000, 0xffff_0000]);
    assert!(buf[W as usize..].iter().all(|&pix| pix == 0));
}

// A clip-path compositor takes the blending branch but never modulates;
// the clip geometry was already intersected into the coverage upstream.
#[test]
fn clip_path_does_not_modulate() {
    let mask: Vec<u32> = vec![0_u32; (W * H) as usize];

    let mut buf = vec![0_u32; (W * H) as usize];
    let mut surface = Surface::new(&mut buf, W, H, W, ColorSpace::Argb8888).unwrap();
    surface.set_compositor(Some(Compositor {
        method: MaskMethod::ClipPath,
        image: mask_image(&mask),
    }));

    let shape = Shape::from_rect(BBox::new(0, 0, W as i32, H as i32));
    fill_solid(&mut surface, &shape, 255, 0, 0, 255).unwrap();

    drop(surface);
    assert!(buf.iter().all(|&pix| pix == 0xffff_0000));
}
