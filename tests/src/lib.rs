#[cfg(test)]
mod pager;
