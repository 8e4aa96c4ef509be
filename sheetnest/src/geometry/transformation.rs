use std::ops::{Add, Mul};

use ordered_float::NotNan;

use crate::geometry::primitives::Point;

//See https://pages.mtu.edu/~shene/COURSES/cs3621/NOTES/geometry/geo-tran.html

///Proper rigid transformation in homogeneous matrix form
#[derive(Clone, Debug, PartialEq)]
pub struct Transformation {
    matrix: [[NotNan<f64>; 3]; 3],
}

impl Transformation {
    pub const fn empty() -> Self {
        Self {
            matrix: EMPTY_MATRIX,
        }
    }

    pub fn translate(mut self, (tx, ty): (f64, f64)) -> Self {
        self.matrix = dot_prod(&transl_m((tx, ty)), &self.matrix);
        self
    }

    /// Appends an exact clockwise quarter turn about the origin: `(x, y) -> (y, -x)`.
    pub fn quarter_turn_cw(mut self) -> Self {
        self.matrix = dot_prod(&QUARTER_TURN_CW_MATRIX, &self.matrix);
        self
    }

    /// Appends a clockwise quarter turn about `pivot`.
    pub fn quarter_turn_cw_about(self, pivot: Point) -> Self {
        let Point(px, py) = pivot;
        self.translate((-px, -py))
            .quarter_turn_cw()
            .translate((px, py))
    }

    pub fn is_empty(&self) -> bool {
        self.matrix == EMPTY_MATRIX
    }

    /// Maps the coordinate pair `(x, y)` through the transformation.
    #[inline(always)]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let m = &self.matrix;
        let t_x = m[0][0].into_inner() * x + m[0][1].into_inner() * y + m[0][2].into_inner();
        let t_y = m[1][0].into_inner() * x + m[1][1].into_inner() * y + m[1][2].into_inner();
        (t_x, t_y)
    }

    /// Whether the transformation contains a (quarter) turn.
    pub fn rotates(&self) -> bool {
        self.matrix[0][0] != _1 || self.matrix[1][1] != _1
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::empty()
    }
}

const _0: NotNan<f64> = unsafe { NotNan::new_unchecked(0.0) };
const _1: NotNan<f64> = unsafe { NotNan::new_unchecked(1.0) };
const _NEG_1: NotNan<f64> = unsafe { NotNan::new_unchecked(-1.0) };

const EMPTY_MATRIX: [[NotNan<f64>; 3]; 3] = [[_1, _0, _0], [_0, _1, _0], [_0, _0, _1]];

const QUARTER_TURN_CW_MATRIX: [[NotNan<f64>; 3]; 3] =
    [[_0, _1, _0], [_NEG_1, _0, _0], [_0, _0, _1]];

fn transl_m((tx, ty): (f64, f64)) -> [[NotNan<f64>; 3]; 3] {
    let h = NotNan::new(tx).expect("tx is NaN");
    let k = NotNan::new(ty).expect("ty is NaN");

    [[_1, _0, h], [_0, _1, k], [_0, _0, _1]]
}

#[inline(always)]
fn dot_prod<T>(l: &[[T; 3]; 3], r: &[[T; 3]; 3]) -> [[T; 3]; 3]
where
    T: Add<Output = T> + Mul<Output = T> + Copy,
{
    [
        [
            l[0][0] * r[0][0] + l[0][1] * r[1][0] + l[0][2] * r[2][0],
            l[0][0] * r[0][1] + l[0][1] * r[1][1] + l[0][2] * r[2][1],
            l[0][0] * r[0][2] + l[0][1] * r[1][2] + l[0][2] * r[2][2],
        ],
        [
            l[1][0] * r[0][0] + l[1][1] * r[1][0] + l[1][2] * r[2][0],
            l[1][0] * r[0][1] + l[1][1] * r[1][1] + l[1][2] * r[2][1],
            l[1][0] * r[0][2] + l[1][1] * r[1][2] + l[1][2] * r[2][2],
        ],
        [
            l[2][0] * r[0][0] + l[2][1] * r[1][0] + l[2][2] * r[2][0],
            l[2][0] * r[0][1] + l[2][1] * r[1][1] + l[2][2] * r[2][1],
            l[2][0] * r[0][2] + l[2][1] * r[1][2] + l[2][2] * r[2][2],
        ],
    ]
}
