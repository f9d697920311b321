use anyhow::{Context, Result};
use log::info;

use simple_linked_list::LinkedList;

fn positional() -> Result<()> {
    let mut list = LinkedList::new();

    // 头部插入
    list.insert_head(3);
    list.insert_head(2);
    list.insert_head(1);
    info!("list: {} (len {})", list, list.len());

    let removed = list.remove(1).context("remove index 1")?;
    info!("removed {} -> {}", removed, list);

    list.insert(list.len(), 9).context("append at tail")?;
    info!("inserted 9 at tail -> {}", list);

    let old = list.set(0, 10).context("replace head")?;
    info!("replaced {} at index 0 -> {}", old, list);

    if let Err(e) = list.get(5) {
        info!("get(5) failed as expected: {}", e);
    }
    Ok(())
}

fn cursors() -> Result<()> {
    let mut list = LinkedList::from(vec!["a", "c", "d"]);

    let mut cursor = list.cursor_head().context("cursor at head")?;
    list.insert_after(&mut cursor, "b").context("insert after head")?;
    info!("inserted after head -> {}", list);

    let mut at_c = list.find(&"c").context("\"c\" should be in the list")?;
    let dropped = list.delete_after(&mut at_c).context("delete after \"c\"")?;
    info!("deleted {} after c -> {}", dropped, list);

    // 结构变化后，旧游标失效
    if let Err(e) = list.insert_after(&mut cursor, "x") {
        info!("old cursor rejected: {}", e);
    }
    Ok(())
}

fn bulk() {
    let mut list: LinkedList<_> = (1..=3).collect();
    list.append_all(vec![4, 5]);
    info!("appended -> {}", list);

    let copy = list.copy();
    list.reverse();
    info!("reversed {} / copy {}", list, copy);

    info!("remove_value(42) -> {}", list.remove_value(&42));
    info!("as vec: {:?}", list.to_vec());
}

fn main() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        unsafe {
            std::env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();
    info!("Starting linked list demo");

    positional()?;
    cursors()?;
    bulk();
    Ok(())
}
