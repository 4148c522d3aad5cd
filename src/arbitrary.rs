use ::quickcheck::{Arbitrary, Gen};

use crate::AvlTree;

impl<K> Arbitrary for AvlTree<K>
where
    K: Arbitrary + Ord,
{
    fn arbitrary(g: &mut Gen) -> Self {
        Vec::<K>::arbitrary(g).into_iter().collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let keys: Vec<K> = self.iter().cloned().collect();
        Box::new(keys.shrink().map(|keys| keys.into_iter().collect()))
    }
}
