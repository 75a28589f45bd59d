// Rust showcase: ownership, pattern matching, and lifetimes

#[derive(Debug)]
struct Person<'a> {
    name: &'a str,
    age: u32,
}

impl<'a> Person<'a> {
    fn new(name: &'a str, age: u32) -> Self {
        Person { name, age }
    }
}

fn main() {
    let person = Person::new("Alice", 30);

    // Pattern matching
    match person.age {
        0..=17 => println!("minor"),
        18..=60 => println!("adult"),
        _ => println!("senior"),
    }

    // Option handling
    let maybe_name: Option<&str> = Some("Bob");
    if let Some(name) = maybe_name {
        println!("Name is {}", name);
    }
}
