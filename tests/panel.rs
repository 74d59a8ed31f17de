mod common;

use common::synthetic_stack::{shifted_ramps, tagged};
use panel_layout::image::{ImageBuffer, ImageView};
use panel_layout::panel::pad_constant;
use panel_layout::{make_panel_image, ImageStack, LayoutError, PanelComposer, PanelOptions};

#[test]
fn five_small_images_two_per_row() {
    let _ = env_logger::builder().is_test(true).try_init();
    let images = shifted_ramps(5, 2, 3);
    for b in [-7, 0, 42] {
        let panel = make_panel_image(&images, 0, b, 2).expect("panel");
        let expected = vec![
            vec![0, 1, 2, 1, 2, 3],
            vec![3, 4, 5, 4, 5, 6],
            vec![2, 3, 4, 3, 4, 5],
            vec![5, 6, 7, 6, 7, 8],
            vec![4, 5, 6, b, b, b],
            vec![7, 8, 9, b, b, b],
        ];
        assert_eq!(panel.to_rows(), expected, "background_fill={b}");
    }
}

#[test]
fn shape_law_holds_across_layouts() {
    for count in 1..=9 {
        for per_row in 1..=5 {
            for pad in 0..=2 {
                let images = tagged(count, 3, 4);
                let panel = make_panel_image(&images, pad, 0, per_row).expect("panel");
                let rows = count.div_ceil(per_row);
                assert_eq!(
                    panel.shape(),
                    (rows * (3 + 2 * pad), per_row * (4 + 2 * pad)),
                    "count={count} per_row={per_row} pad={pad}"
                );
            }
        }
    }
}

#[test]
fn every_image_lands_in_its_padded_cell() {
    let images = tagged(7, 3, 2);
    let options = PanelOptions::new(3, 0u32).with_pad_width(2);
    let composer = PanelComposer::new(options).unwrap();
    let geometry = composer.geometry(&images).unwrap();
    let panel = composer.compose(&images).unwrap();

    for i in 0..images.len() {
        let expected = pad_constant(&images.image(i), 2, 0).expect("padded image");
        let cell = geometry.cell_view(&panel, i);
        let cell_rows: Vec<Vec<u32>> = cell.rows().map(<[u32]>::to_vec).collect();
        assert_eq!(cell_rows, expected.to_rows(), "image {i}");
    }
}

#[test]
fn trailing_slots_are_uniform_filler() {
    let images = tagged(4, 2, 2);
    let composer = PanelComposer::new(PanelOptions::new(3, 9u32).with_pad_width(1)).unwrap();
    let geometry = composer.geometry(&images).unwrap();
    let (panel, report) = composer.compose_with_report(&images).unwrap();

    assert_eq!(report.filler_cells, 2);
    assert_eq!(report.geometry.rows, 2);
    for i in images.len()..geometry.cells() {
        let cell = geometry.cell_view(&panel, i);
        assert!(cell.rows().all(|r| r.iter().all(|&v| v == 9)), "cell {i}");
    }
    // Real images keep their pixels; the value 9 never occurs in `tagged`.
    let cell = geometry.cell_view(&panel, 3);
    assert_eq!(cell.get(1, 1), 30_001);
}

#[test]
fn exact_rows_need_no_filler() {
    let images = tagged(6, 1, 1);
    let (panel, report) = PanelComposer::new(PanelOptions::new(3, 0u32))
        .unwrap()
        .compose_with_report(&images)
        .unwrap();
    assert_eq!(report.filler_cells, 0);
    assert_eq!(panel.to_rows(), vec![vec![1, 10_001, 20_001], vec![30_001, 40_001, 50_001]]);
}

#[test]
fn float_pixels_are_copied_exactly() {
    let data = vec![0.1f64, -2.5, 1e-12, f64::MAX];
    let images = ImageStack::from_shape_vec(&[4, 1, 1], data.clone()).unwrap();
    let panel = make_panel_image(&images, 0, f64::NAN, 4).unwrap();
    assert_eq!(panel.as_slice().unwrap(), &data[..]);
}

#[test]
fn input_stack_is_left_untouched() {
    let images = tagged(3, 2, 2);
    let before = images.clone();
    let _ = make_panel_image(&images, 3, 0, 2).unwrap();
    assert_eq!(images, before);
}

#[test]
fn empty_stack_gives_single_filler_row() {
    let images = ImageStack::<u8>::from_shape_vec(&[0, 2, 2], Vec::new()).unwrap();
    let panel = make_panel_image(&images, 1, 7, 3).unwrap();
    assert_eq!(panel.shape(), (4, 12));
    assert!(panel.data.iter().all(|&v| v == 7));
}

#[test]
fn invalid_arguments_are_rejected() {
    let images = tagged(2, 2, 2);
    let err = make_panel_image(&images, 0, 0, 0).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(PanelComposer::new(PanelOptions::new(0, 0u8)).is_err());
}

#[test]
fn shape_errors_surface_before_composition() {
    let err = ImageStack::from_shape_vec(&[6, 6], vec![0u8; 36]).unwrap_err();
    assert_eq!(err, LayoutError::Rank { found: 2 });
    assert!(err.is_shape_error());

    let images = vec![ImageBuffer::<u8>::new(3, 3), ImageBuffer::<u8>::new(3, 4)];
    let err = ImageStack::from_images(images).unwrap_err();
    assert!(err.is_shape_error());
}

#[test]
fn panel_converts_to_luma_buffer() {
    let images = tagged(3, 2, 2);
    let panel: ImageBuffer<u8> = {
        let small: Vec<u8> = images.as_slice().iter().map(|&v| (v % 251) as u8).collect();
        let stack = ImageStack::from_shape_vec(&[3, 2, 2], small).unwrap();
        make_panel_image(&stack, 1, 255, 2).unwrap()
    };
    let (h, w) = panel.shape();
    let luma = panel.into_luma().unwrap();
    assert_eq!(luma.dimensions(), (w as u32, h as u32));
    assert_eq!(luma.get_pixel(0, 0).0, [255]);
}
