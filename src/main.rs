use keyed_maps::hash::{ChainedHashTable, ProbedHashTable};
use keyed_maps::traits::KeyedMap;

fn identity(key: &u64) -> u64 {
    *key
}

fn main() {
    println!("\n[ChainedHashTable]\n");

    let mut chained = ChainedHashTable::new(identity);
    for i in 0..300 {
        chained.put(i, i);
    }
    println!("{:?} {:?} {:?}", chained.get(&1), chained.get(&7), chained.get(&13));

    chained.put(14, 0);
    println!("{:?}", chained.get(&14));
    println!("{} {}", chained.has_key(&2), chained.has_key(&20));

    chained.remove(&1);
    println!("{} (cap {})", chained.has_key(&1), chained.cap());

    println!("\n[ProbedHashTable]\n");

    let mut probed = ProbedHashTable::new(identity);
    for (key, value) in [(0, 0), (10, 1), (20, 2), (1, 3), (2, 4), (8, 8)] {
        probed.put(key, value);
    }
    println!("{probed:?}");

    probed.put(7, 7);
    probed.put(6, 6);
    probed.put(5, 5);
    probed.remove(&20);
    probed.remove(&2);
    println!("{probed:?}");
    println!("{probed}");

    println!("\n[dyn KeyedMap]\n");

    let maps: [Box<dyn KeyedMap<u64, &str>>; 2] = [
        Box::new(ChainedHashTable::<u64, &str, _>::new(identity)),
        Box::new(ProbedHashTable::<u64, &str, _>::new(identity)),
    ];
    for mut map in maps {
        map.put(3, "three");
        println!("{:?} {:?}", map.get(&3), map.get(&4));
    }
}
