mod matrix;

pub use matrix::{frustum, ortho_from_view, perspective_from_view, target_to};

use crate::error::{CameraError, Result};
use crate::math::{Matrix4, Point3, Vector3, Vector4};

/// Half-extent of the fixed isometric view window before aspect scaling.
const ISOMETRIC_HALF_SIZE: f64 = 2.0;

/// Window-space depth range the NDC depth is remapped into.
const NEAR_RANGE: f64 = 0.0;
const FAR_RANGE: f64 = 1.0;

/// Projection kind, carrying the parameters specific to each mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionMode {
    /// Pinhole perspective frustum.
    Perspective {
        /// Vertical field of view in degrees.
        fov: f64,
        /// Film gauge in millimeters; scales `film_offset`.
        film_gauge: f64,
        /// Horizontal film offset; skews the frustum when non-zero.
        film_offset: f64,
    },
    /// Orthographic projection with the camera snapped to unit distance
    /// along its original direction and a fixed aspect-scaled window.
    Isometric,
    /// Orthographic projection over an explicit window.
    Orthographic {
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
    },
}

impl ProjectionMode {
    /// Perspective with a 50° field of view and 35mm film gauge.
    #[must_use]
    pub fn perspective() -> Self {
        Self::Perspective {
            fov: 50.0,
            film_gauge: 35.0,
            film_offset: 0.0,
        }
    }

    /// Orthographic over the default `[-1, 1]` window.
    #[must_use]
    pub fn orthographic() -> Self {
        Self::Orthographic {
            left: -1.0,
            right: 1.0,
            bottom: -1.0,
            top: 1.0,
        }
    }

    fn is_perspective(self) -> bool {
        matches!(self, Self::Perspective { .. })
    }
}

/// Camera configuration.
///
/// Unset `near`/`far` take mode-dependent defaults at build time:
/// 0.01 / 1000 for perspective, -100 / 100 for the orthographic modes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub position: Point3,
    pub target: Point3,
    pub up: Vector3,
    pub mode: ProjectionMode,
    /// Viewport origin, in pixels.
    pub x: f64,
    pub y: f64,
    /// Viewport width in pixels; must be positive.
    pub width: f64,
    /// Viewport height in pixels; must be positive.
    pub height: f64,
    pub zoom: f64,
    pub near: Option<f64>,
    pub far: Option<f64>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Point3::new(1.0, 1.0, 1.0),
            target: Point3::origin(),
            up: Vector3::new(0.0, 1.0, 0.0),
            mode: ProjectionMode::perspective(),
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
            zoom: 1.0,
            near: None,
            far: None,
        }
    }
}

/// The result of projecting a 3D point into window space.
///
/// `x`/`y` are pixel coordinates with the origin at the top-left and Y
/// growing downward. `depth` is the NDC depth remapped into `[0, 1]`
/// (0 at the near plane). `inv_w` is the reciprocal of the clip-space w,
/// or 0 when w is degenerate; callers use it for perspective-correct
/// interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
    pub inv_w: f64,
}

/// A camera built once from a [`CameraConfig`].
///
/// Holds the view, projection, and combined matrices plus the pixel
/// viewport; [`Camera::project`] is pure, so projecting through two
/// cameras built from the same configuration gives identical results.
#[derive(Debug, Clone)]
pub struct Camera {
    view: Matrix4,
    projection: Matrix4,
    combined: Matrix4,
    viewport: [f64; 4],
}

impl Camera {
    /// Builds the view, projection, and combined matrices.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::EmptyViewport` when the viewport size is not
    /// positive, `CameraError::DegenerateLookAt` when the look-at frame
    /// cannot be built, and `CameraError::SingularCameraMatrix` when the
    /// camera matrix cannot be inverted.
    pub fn new(config: &CameraConfig) -> Result<Self> {
        if config.width <= 0.0 || config.height <= 0.0 {
            return Err(CameraError::EmptyViewport {
                width: config.width,
                height: config.height,
            }
            .into());
        }
        let ortho_mode = !config.mode.is_perspective();
        let near = config.near.unwrap_or(if ortho_mode { -100.0 } else { 0.01 });
        let far = config.far.unwrap_or(if ortho_mode { 100.0 } else { 1000.0 });
        let aspect = config.width / config.height;

        let mut position = config.position;
        let mut zoom = config.zoom;
        let projection = match config.mode {
            ProjectionMode::Isometric => {
                // Snap the camera to unit distance along its original
                // direction; the lost distance folds into the zoom.
                let dist = position.coords.norm();
                if dist > 0.0 {
                    position = Point3::from(position.coords / dist);
                    zoom /= dist / 2.0;
                }
                let h = ISOMETRIC_HALF_SIZE * aspect;
                let v = ISOMETRIC_HALF_SIZE;
                matrix::ortho_from_view(-h, h, -v, v, zoom, near, far)
            }
            ProjectionMode::Perspective {
                fov,
                film_gauge,
                film_offset,
            } => matrix::perspective_from_view(
                fov,
                aspect,
                near,
                far,
                zoom,
                film_gauge,
                film_offset,
            ),
            ProjectionMode::Orthographic {
                left,
                right,
                bottom,
                top,
            } => matrix::ortho_from_view(left, right, bottom, top, zoom, near, far),
        };

        let camera = matrix::target_to(position, config.target, config.up)?;
        let view = camera
            .try_inverse()
            .ok_or(CameraError::SingularCameraMatrix)?;

        Ok(Self {
            view,
            projection,
            combined: projection * view,
            viewport: [config.x, config.y, config.width, config.height],
        })
    }

    /// The world-to-camera matrix.
    #[must_use]
    pub fn view(&self) -> &Matrix4 {
        &self.view
    }

    /// The projection matrix.
    #[must_use]
    pub fn projection(&self) -> &Matrix4 {
        &self.projection
    }

    /// `projection * view`.
    #[must_use]
    pub fn combined(&self) -> &Matrix4 {
        &self.combined
    }

    /// The pixel viewport as `[x, y, width, height]`.
    #[must_use]
    pub fn viewport(&self) -> [f64; 4] {
        self.viewport
    }

    /// Projects a 3D point into window space.
    ///
    /// Applies the combined matrix, divides by the clip-space w (skipped
    /// when w is exactly 0), maps NDC into the pixel viewport, and inverts
    /// the Y axis so window coordinates grow downward.
    #[must_use]
    pub fn project(&self, p: Point3) -> ProjectedPoint {
        let clip = self.combined * Vector4::new(p.x, p.y, p.z, 1.0);
        let w = clip.w;
        let (nx, ny, nz) = if w == 0.0 {
            (clip.x, clip.y, clip.z)
        } else {
            (clip.x / w, clip.y / w, clip.z / w)
        };
        let [vx, vy, vw, vh] = self.viewport;
        let x = vx + (vw / 2.0) * nx + vw / 2.0;
        let y_raw = vy + (vh / 2.0) * ny + vh / 2.0;
        ProjectedPoint {
            x,
            y: vh - y_raw,
            depth: ((FAR_RANGE - NEAR_RANGE) / 2.0) * nz + (FAR_RANGE + NEAR_RANGE) / 2.0,
            inv_w: if w == 0.0 { 0.0 } else { 1.0 / w },
        }
    }
}
