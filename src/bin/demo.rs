//! A small command-line tour of the list.
//!
//! Without arguments it replays the classic exercise: build a list, delete a
//! key, search, reverse, sort, and merge two sorted lists. With integer
//! arguments it builds the list from them instead.
//!
//! ```text
//! cargo run --bin demo
//! cargo run --bin demo -- 15 10 5 20 25
//! ```

use anyhow::{Context, Result};
use chain_list::List;
use std::env;
use std::iter::FromIterator;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        walkthrough()
    } else {
        tour(parse(&args)?)
    }
}

fn parse(args: &[String]) -> Result<List<i64>> {
    let mut list = List::new();
    for arg in args {
        let value: i64 = arg
            .parse()
            .with_context(|| format!("argument `{}` is not an integer", arg))?;
        list.push_back(value);
    }
    Ok(list)
}

fn tour(mut list: List<i64>) -> Result<()> {
    println!("list:     {:?}", list);

    list.reverse();
    println!("reversed: {:?}", list);

    list.sort();
    println!("sorted:   {:?}", list);
    Ok(())
}

fn walkthrough() -> Result<()> {
    let mut list = List::new();
    list.push_front(5);
    list.push_front(10);
    list.push_front(15);
    list.push_back(20);
    list.push_back(25);
    println!("built:        {:?}", list);

    list.remove_first(&10);
    println!("deleted 10:   {:?}", list);

    match list.find(&15) {
        Some(cursor) => println!("found:        {:?}", cursor.current()),
        None => println!("found:        nothing"),
    }

    list.reverse();
    println!("reversed:     {:?}", list);

    list.sort();
    println!("sorted:       {:?}", list);

    let a = List::from_iter([1, 4, 7]);
    let b = List::from_iter([2, 3, 6, 8]);
    println!("merge {:?} and {:?}:", a, b);
    println!("              {:?}", a.merge(b));
    Ok(())
}
