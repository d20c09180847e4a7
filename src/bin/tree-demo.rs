use clap::{Parser, ValueEnum};
use ordered_tree::{OrderedTree, Traversal};

#[derive(Clone, Copy, ValueEnum)]
enum Order {
    In,
    Pre,
    Post,
}

impl From<Order> for Traversal {
    fn from(order: Order) -> Self {
        match order {
            Order::In => Traversal::InOrder,
            Order::Pre => Traversal::PreOrder,
            Order::Post => Traversal::PostOrder,
        }
    }
}

#[derive(Parser)]
#[command(name = "tree-demo")]
#[command(about = "Builds a binary search tree and prints it")]
struct Args {
    /// Values to insert, in order.
    #[arg(value_delimiter = ',', allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Values to delete after every insert is done.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    delete: Vec<i64>,

    #[arg(long, value_enum, default_value = "in")]
    order: Order,
}

fn main() {
    let args = Args::parse();

    let mut tree = OrderedTree::new();
    for value in args.values {
        if !tree.insert(value) {
            println!("{} is already in the tree", value);
        }
    }

    for key in &args.delete {
        match tree.delete(key) {
            Ok(value) => println!("Deleted {}", value),
            Err(e) => println!("Could not delete {}: {}", key, e),
        }
    }

    println!("{}", tree.printed(args.order.into()));
    println!("{} values, height {}", tree.len(), tree.height());
}
