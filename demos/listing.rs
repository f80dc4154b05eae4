use rollback::{Rollback, Signal};

fn main() {
    let mut title = Rollback::builder()
        .limit(4)
        .connect(|signal: Signal| println!("signal: {signal:?}"))
        .build(String::from("Untitled"));

    title.set(String::from("Draft"));
    title.set(String::from("Draft 2"));
    title.set_saved();
    title.set(String::from("Final"));
    title.set(String::from("Final (edited)"));
    title.undo();

    println!("current: {title}");
    println!("{}", title.display());
}
