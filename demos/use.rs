use avl_set::AvlTree;

fn main() {
    let mut tree = AvlTree::with_root(10);
    for key in [5, 15, 3, 7, 12, 17] {
        tree.insert(key);
    }
    assert!(!tree.insert(7));
    println!("{:?} (height {})", tree, tree.height());

    tree.delete(&10);
    assert!(!tree.contains(&10));
    assert!(!tree.delete(&10));

    print!("{{ ");
    for key in &tree {
        print!("{key}, ");
    }
    println!("}}");
    println!("in order: {:?}", tree.in_order());
}
