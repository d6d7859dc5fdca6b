/// Cell type of an extrema map.
///
/// The scanner writes [`Mark::MAXIMUM`] (+1) or [`Mark::MINIMUM`] (-1) into
/// classified cells and never touches the rest, so callers choose the
/// background value when they allocate the map.
pub trait Mark: Copy {
    const MAXIMUM: Self;
    const MINIMUM: Self;
}

macro_rules! impl_mark {
    ($($t:ty => $max:expr, $min:expr;)*) => {
        $(
            impl Mark for $t {
                const MAXIMUM: Self = $max;
                const MINIMUM: Self = $min;
            }
        )*
    };
}

impl_mark! {
    i8 => 1, -1;
    i16 => 1, -1;
    i32 => 1, -1;
    i64 => 1, -1;
    f32 => 1.0, -1.0;
    f64 => 1.0, -1.0;
}
