use crate::types::alloc_type::{Box, String};

/// Distinguishes an absent ("null") value from a present one.
///
/// `Option::None` is the absent value; every other implementor is always present. The
/// derived comparison rules treat an absent value as failing every ordering check.
///
/// # Examples
///
/// ```
/// use valid_rail::traits::Presence;
///
/// assert_eq!(Some(3).present(), Some(&3));
/// assert_eq!(None::<u8>.present(), None);
/// assert_eq!(7u64.present(), Some(&7));
/// ```
pub trait Presence {
    type Value: ?Sized;

    fn present(&self) -> Option<&Self::Value>;

    #[inline]
    fn is_present(&self) -> bool {
        self.present().is_some()
    }
}

impl<T> Presence for Option<T> {
    type Value = T;

    #[inline]
    fn present(&self) -> Option<&T> {
        self.as_ref()
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    type Value = T::Value;

    #[inline]
    fn present(&self) -> Option<&T::Value> {
        (**self).present()
    }
}

impl<T: Presence + ?Sized> Presence for Box<T> {
    type Value = T::Value;

    #[inline]
    fn present(&self) -> Option<&T::Value> {
        (**self).present()
    }
}

macro_rules! always_present {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Presence for $ty {
                type Value = $ty;

                #[inline]
                fn present(&self) -> Option<&$ty> {
                    Some(self)
                }
            }
        )*
    };
}

always_present!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String,
);
