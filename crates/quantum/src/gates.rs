use linalg::{c64, Mat2};

pub fn pauli_x() -> Mat2 {
    let z = c64(0.0, 0.0);
    let o = c64(1.0, 0.0);
    Mat2::new(z, o, o, z)
}

pub fn pauli_y() -> Mat2 {
    let z = c64(0.0, 0.0);
    Mat2::new(z, c64(0.0, -1.0), c64(0.0, 1.0), z)
}

pub fn pauli_z() -> Mat2 {
    Mat2::diag(c64(1.0, 0.0), c64(-1.0, 0.0))
}
