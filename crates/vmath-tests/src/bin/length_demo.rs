use vmath_core::Vec3;

fn main() {
    let a = Vec3::new(1.0, 2.0, 0.0);
    let b = Vec3::new(-3.0, 5.0, 0.0);
    let c = a + b;

    println!("{} ||  {} || {}", a.length(), b.length(), c.length());
}
