mod ops;
mod vec;
mod vec2;
mod vec3;
mod vec4;

pub use vec::Vector;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
