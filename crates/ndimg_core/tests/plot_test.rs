//! Integration tests for grid plotting.

use ndimg_core::{DenseGrid, MatrixBuffer, Plottable, RenderConfig, SparseGrid};

fn temp_png(name: &str) -> std::path::PathBuf {
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("ndimg_{name}_{id}.png"))
}

fn test_config() -> RenderConfig {
    RenderConfig {
        verbosity: 1,
        with_color: true,
        annotate_image: true,
        draw_diagonal: true,
        draw_boundaries: true,
        scaling_factor: 50,
        ..RenderConfig::default()
    }
}

#[test]
fn test_generate_sparse_image() {
    let config = test_config();

    let mut matrix: SparseGrid<i32> = SparseGrid::empty(10, 10).unwrap();
    matrix[[1, 2]] = Some(1);
    matrix[[2, 5]] = Some(7);
    matrix[[4, 5]] = Some(10);
    matrix[[5, 5]] = Some(5);
    matrix[[5, 4]] = Some(-15);
    matrix[[8, 9]] = Some(-190);

    let scaled = matrix.scaled(&config).unwrap();
    let path = temp_png("sparse");
    scaled.plot(&config, &path).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (501, 501));
    // centre of block (row 8, col 9), the minimum
    assert_eq!(img.get_pixel(9 * 50 + 25, 8 * 50 + 24).0, [0, 0, 0, 255]);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_generate_dense_image() {
    let config = test_config();

    let mut matrix = DenseGrid::from_elem(10, 10, 0_i32).unwrap();
    matrix[[1, 2]] = 1;
    matrix[[2, 5]] = 7;
    matrix[[4, 5]] = 10;
    matrix[[5, 5]] = 5;
    matrix[[5, 4]] = -15;
    matrix[[8, 9]] = -190;

    let scaled = matrix.scaled(&config).unwrap();
    assert_eq!(scaled.min_max(), (-190, 10));

    let path = temp_png("dense");
    scaled.plot(&config, &path).unwrap();
    assert!(path.exists());

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_flattened_matrix_plots() {
    let config = RenderConfig { scaling_factor: 3, ..RenderConfig::default() };
    let matrix = MatrixBuffer::from_rows(&[
        [10.0_f32, 20.0, 30.0],
        [40.0, 50.0, 60.0],
        [10.0, 20.0, 30.0],
    ])
    .unwrap();

    let grid = matrix.view().to_grid().unwrap();
    assert_eq!(grid.min_max(), (0.0, 60.0));

    let img = grid.scaled(&config).unwrap().render(&config).unwrap();
    assert_eq!(img.dimensions(), (10, 10));
    // (row 1, col 2) = 60 is the maximum
    assert_eq!(img.get_pixel(7, 4).0, [255, 0, 0, 255]);
}
