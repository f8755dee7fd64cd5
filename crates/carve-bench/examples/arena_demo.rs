//! Walk-through of pool allocation, freeing, and the usage report.
//!
//! Run with `cargo run --example arena_demo`.

use carve_arena::PoolArena;

struct Person {
    name: &'static str,
    age: i32,
}

fn main() {
    // Mixed-type allocations from a 1 KiB arena.
    let mut arena = PoolArena::with_capacity(1024).expect("arena init");

    let a = arena.alloc(25_i32).expect("alloc i32");
    let b = arena.alloc(3.5_f32).expect("alloc f32");
    let p = arena
        .alloc(Person {
            name: "Richy",
            age: 24,
        })
        .expect("alloc Person");

    // SAFETY: all three pointers come from the arena above, which is still
    // alive, and each allocation here lands on an address aligned for its
    // type (offsets 0, 4, and 8 of a 16-byte-aligned buffer).
    unsafe {
        println!("{}", *a.as_ptr());
        println!("{}", *b.as_ptr());
        let person = &*p.as_ptr();
        println!("{} is {}", person.name, person.age);
    }

    println!("\n{}\n", arena.report());
    arena.free(a.as_ptr());
    println!("{}\n", arena.report());

    // Reuse after free: a 12-byte arena holds exactly three ints; freeing
    // the middle one makes room for a fourth.
    let mut small = PoolArena::with_capacity(12).expect("arena init");
    let x = small.alloc(101_i32).expect("alloc");
    let y = small.alloc(250_i32).expect("alloc");
    let z = small.alloc(23_i32).expect("alloc");

    small.free(y.as_ptr());
    let w = small.alloc(45_i32).expect("alloc reuses the freed slot");

    // SAFETY: x, z, w are live allocations from `small`; all i32-aligned.
    unsafe {
        println!("{} {} {}", *x.as_ptr(), *z.as_ptr(), *w.as_ptr());
    }
    println!("\n{}", small.report());
}
