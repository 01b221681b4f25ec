use crate::{BitReader, BitWrite, ConstBitLength, Serde, SerdeErr};

// Value types that remote calls commonly carry. Each is written field by
// field in declaration order.
macro_rules! value_type {
    (
        $(#[$meta:meta])*
        pub struct $name:ident { $($field:ident: $ty:ty),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        pub struct $name {
            $(pub $field: $ty),+
        }

        impl $name {
            pub const fn new($($field: $ty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl Serde for $name {
            fn ser(&self, writer: &mut dyn BitWrite) {
                $(self.$field.ser(writer);)+
            }

            fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
                Ok(Self {
                    $($field: <$ty as Serde>::de(reader)?),+
                })
            }

            fn bit_length(&self) -> u32 {
                <Self as ConstBitLength>::const_bit_length()
            }
        }

        impl ConstBitLength for $name {
            fn const_bit_length() -> u32 {
                0 $(+ <$ty as ConstBitLength>::const_bit_length())+
            }
        }
    };
}

value_type! {
    pub struct Vec2 { x: f32, y: f32 }
}

value_type! {
    pub struct Vec3 { x: f32, y: f32, z: f32 }
}

value_type! {
    pub struct Vec4 { x: f32, y: f32, z: f32, w: f32 }
}

value_type! {
    /// A rotation, stored as an unnormalized `x, y, z, w` quaternion
    pub struct Quat { x: f32, y: f32, z: f32, w: f32 }
}

value_type! {
    /// Linear color with float channels
    pub struct Color { r: f32, g: f32, b: f32, a: f32 }
}

value_type! {
    /// 8-bit-per-channel color
    pub struct Color32 { r: u8, g: u8, b: u8, a: u8 }
}

value_type! {
    pub struct Ray { origin: Vec3, direction: Vec3 }
}

value_type! {
    pub struct Ray2D { origin: Vec2, direction: Vec2 }
}

impl Quat {
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);
}
