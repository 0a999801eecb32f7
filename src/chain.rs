//! Entry nodes and the singly linked chains built from them.
//!
//! A chain is an `Option<Box<Entry>>`: each link exclusively owns the
//! rest of the chain. Every operation here moves boxes between links and
//! never clones or reallocates a node.

use core::borrow::Borrow;

pub(crate) type Link<K, V> = Option<Box<Entry<K, V>>>;

#[derive(Debug)]
pub(crate) struct Entry<K, V> {
    /// Unreduced strategy hash of `key`, computed once on insert.
    pub(crate) hash: u64,
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) next: Link<K, V>,
}

impl<K, V> Entry<K, V> {
    pub(crate) fn new(hash: u64, key: K, value: V) -> Box<Self> {
        Box::new(Self {
            hash,
            key,
            value,
            next: None,
        })
    }
}

/// Make `node` the new head of the chain at `head`.
#[inline]
pub(crate) fn push_front<K, V>(head: &mut Link<K, V>, mut node: Box<Entry<K, V>>) {
    node.next = head.take();
    *head = Some(node);
}

pub(crate) fn find<'a, K, V, Q>(head: &'a Link<K, V>, q: &Q) -> Option<&'a Entry<K, V>>
where
    K: Borrow<Q>,
    Q: ?Sized + Eq,
{
    let mut cur = head.as_deref();
    while let Some(e) = cur {
        if e.key.borrow() == q {
            return Some(e);
        }
        cur = e.next.as_deref();
    }
    None
}

pub(crate) fn find_mut<'a, K, V, Q>(head: &'a mut Link<K, V>, q: &Q) -> Option<&'a mut Entry<K, V>>
where
    K: Borrow<Q>,
    Q: ?Sized + Eq,
{
    let mut cur = head.as_deref_mut();
    while let Some(e) = cur {
        if e.key.borrow() == q {
            return Some(e);
        }
        cur = e.next.as_deref_mut();
    }
    None
}

/// Splice the node matching `q` out of the chain and hand it back with its
/// `next` cleared. The predecessor link (or `head`) takes over the rest.
pub(crate) fn unlink<K, V, Q>(head: &mut Link<K, V>, q: &Q) -> Option<Box<Entry<K, V>>>
where
    K: Borrow<Q>,
    Q: ?Sized + Eq,
{
    let mut cur = head;
    loop {
        match cur.as_deref() {
            None => return None,
            Some(e) if e.key.borrow() == q => break,
            Some(_) => {}
        }
        if let Some(e) = cur {
            cur = &mut e.next;
        }
    }
    let mut node = cur.take()?;
    *cur = node.next.take();
    Some(node)
}

/// Drop a chain node by node so long chains do not recurse through `Box`.
pub(crate) fn drop_chain<K, V>(mut link: Link<K, V>) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

#[cfg(test)]
pub(crate) fn keys_of<K: Clone, V>(head: &Link<K, V>) -> Vec<K> {
    let mut out = Vec::new();
    let mut cur = head.as_deref();
    while let Some(e) = cur {
        out.push(e.key.clone());
        cur = e.next.as_deref();
    }
    out
}
