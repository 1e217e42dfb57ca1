use studentrec::StudentRecord;

fn main() {
    let mut john = StudentRecord::new();
    john.id = 1;
    john.name = "John".to_string();

    let mut jane = StudentRecord::new();
    jane.id = 2;
    jane.name = "Jane".to_string();

    println!("{}", john.display());
    println!("{}", jane.display());
}
