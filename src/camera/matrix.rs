use crate::error::{CameraError, Result};
use crate::math::{Matrix4, Point3, Vector3, TOLERANCE};

/// Builds a camera-to-world matrix positioned at `eye`, oriented toward
/// `target`, with `up` as the vertical reference.
///
/// # Errors
///
/// Returns `CameraError::DegenerateLookAt` when `eye` coincides with
/// `target` or `up` is parallel to the view direction.
pub fn target_to(eye: Point3, target: Point3, up: Vector3) -> Result<Matrix4> {
    let z = eye - target;
    let z_len = z.norm();
    if z_len < TOLERANCE {
        return Err(CameraError::DegenerateLookAt.into());
    }
    let z = z / z_len;

    let x = up.cross(&z);
    let x_len = x.norm();
    if x_len < TOLERANCE {
        return Err(CameraError::DegenerateLookAt.into());
    }
    let x = x / x_len;
    let y = z.cross(&x);

    Ok(Matrix4::new(
        x.x, y.x, z.x, eye.x, //
        x.y, y.y, z.y, eye.y, //
        x.z, y.z, z.z, eye.z, //
        0.0, 0.0, 0.0, 1.0,
    ))
}

/// Orthographic projection over a zoom-scaled window.
///
/// `zoom` scales the `[left, right] x [bottom, top]` window about its
/// center before the standard orthographic matrix is built (NDC z in
/// `[-1, 1]`).
#[must_use]
pub fn ortho_from_view(
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
    zoom: f64,
    near: f64,
    far: f64,
) -> Matrix4 {
    let dx = (right - left) / (2.0 * zoom);
    let dy = (top - bottom) / (2.0 * zoom);
    let cx = (right + left) / 2.0;
    let cy = (top + bottom) / 2.0;
    ortho(cx - dx, cx + dx, cy - dy, cy + dy, near, far)
}

fn ortho(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Matrix4 {
    let w = right - left;
    let h = top - bottom;
    let d = far - near;
    Matrix4::new(
        2.0 / w,
        0.0,
        0.0,
        -(right + left) / w,
        0.0,
        2.0 / h,
        0.0,
        -(top + bottom) / h,
        0.0,
        0.0,
        -2.0 / d,
        -(far + near) / d,
        0.0,
        0.0,
        0.0,
        1.0,
    )
}

/// Perspective projection from a vertical field of view in degrees.
///
/// `zoom` narrows the frustum; a non-zero `film_offset` skews it
/// horizontally, scaled by `film_gauge` and the aspect ratio.
#[must_use]
pub fn perspective_from_view(
    fov_deg: f64,
    aspect: f64,
    near: f64,
    far: f64,
    zoom: f64,
    film_gauge: f64,
    film_offset: f64,
) -> Matrix4 {
    let top = near * (0.5 * fov_deg.to_radians()).tan() / zoom;
    let height = 2.0 * top;
    let width = aspect * height;
    let mut left = -0.5 * width;
    if film_offset != 0.0 {
        let film_width = film_gauge * aspect.min(1.0);
        left += near * film_offset / film_width;
    }
    frustum(left, left + width, top - height, top, near, far)
}

/// General perspective frustum matrix (OpenGL convention, NDC z in
/// `[-1, 1]`, camera looking down -z).
#[must_use]
pub fn frustum(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Matrix4 {
    let x = 2.0 * near / (right - left);
    let y = 2.0 * near / (top - bottom);
    let a = (right + left) / (right - left);
    let b = (top + bottom) / (top - bottom);
    let c = -(far + near) / (far - near);
    let d = -2.0 * far * near / (far - near);
    Matrix4::new(
        x, 0.0, a, 0.0, //
        0.0, y, b, 0.0, //
        0.0, 0.0, c, d, //
        0.0, 0.0, -1.0, 0.0,
    )
}
