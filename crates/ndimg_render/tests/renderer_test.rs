//! Receiving-side checks: what a renderer gets is what the caller built.

use ndimg_core::{MatrixBuffer, MatrixView};
use ndimg_render::{Frame, RecordingRenderer, Renderer};
use ndimg_shared::{Cell, CellWithPosition, Color, Position, RasterDims};

fn drive(renderer: &mut dyn Renderer) {
    let black = Color::new(0, 0, 0, 0);
    let white = Color::new(255, 255, 255, 0);
    let cells = vec![
        CellWithPosition::new(Position::new(20, 10), 10, black),
        CellWithPosition::new(Position::new(30, 50), 10, white),
    ];
    let dims = renderer.positioned_dims(&cells);
    renderer.read_cells_with_position(&cells, dims).unwrap();
}

#[test]
fn test_two_positioned_cells_received_in_order() {
    let mut recorder = RecordingRenderer::validating();
    drive(&mut recorder);

    let Some(Frame::PositionedCells { cells, dims }) = recorder.last() else {
        panic!("expected a positioned frame, got {:?}", recorder.last());
    };
    assert_eq!(cells.len(), 2);
    assert_eq!(*dims, RasterDims::new(51, 31));
    assert_eq!(cells[0], CellWithPosition::new(Position::new(20, 10), 10, Color::new(0, 0, 0, 0)));
    assert_eq!(
        cells[1],
        CellWithPosition::new(Position::new(30, 50), 10, Color::new(255, 255, 255, 0))
    );
}

#[test]
fn test_cells_round_trip_every_field() {
    let mut recorder = RecordingRenderer::new();
    let cells: Vec<Cell> = (0..=255_u8)
        .map(|i| {
            Cell::new(
                i32::from(i) * 1_000_003 - 97_000_000,
                Color::new(i, 255 - i, i.rotate_left(3), i ^ 0x5a),
            )
        })
        .collect();

    recorder.read_cells(&cells, RasterDims::new(16, 16)).unwrap();

    match recorder.last() {
        Some(Frame::Cells { cells: received, dims }) => {
            assert_eq!(received, &cells);
            assert_eq!(*dims, RasterDims::new(16, 16));
        }
        other => panic!("expected a cell frame, got {other:?}"),
    }
}

#[test]
fn test_matrix_received_row_major() {
    let mut recorder = RecordingRenderer::new();
    let matrix = MatrixBuffer::from_rows(&[
        [10.0_f32, 20.0, 30.0],
        [40.0, 50.0, 60.0],
        [10.0, 20.0, 30.0],
    ])
    .unwrap();

    recorder
        .show_matrix(MatrixView::new(matrix.as_slice(), matrix.nrow(), matrix.ncol()).unwrap())
        .unwrap();

    let Some(Frame::Matrix(received)) = recorder.last() else {
        panic!("expected a matrix frame");
    };
    assert_eq!(received.as_slice(), &[10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 10.0, 20.0, 30.0]);
    assert_eq!((received.nrow(), received.ncol()), (3, 3));
}

#[test]
fn test_boxed_renderer_forwards() {
    let mut boxed: Box<dyn Renderer> = Box::new(RecordingRenderer::new());
    assert_eq!(boxed.name(), "recording");
    assert_eq!(boxed.double_input(8), 16);
    boxed.show_vector(&[0.5]).unwrap();
}
