use enum_mask::{enable_bitmask, BitMask};

#[derive(Clone, Copy, Debug)]
enum Perm {
    Read = 0x01,
    Write = 0x02,
    Exec = 0x04,
    SetUid = 0x08,
}
enable_bitmask!(Perm: u8, Perm::Read, Perm::Write, Perm::Exec, Perm::SetUid);

type Perms = BitMask<Perm>;

fn describe(perms: Perms) {
    for (flag, name) in [
        (Perm::Read, "read"),
        (Perm::Write, "write"),
        (Perm::Exec, "exec"),
        (Perm::SetUid, "setuid"),
    ] {
        let state = if perms.is_set(flag) { "on" } else { "off" };
        println!("  {name:>6}: {state}");
    }
}

fn main() {
    let mut perms = Perms::empty();
    perms |= Perm::Read;
    println!("start from a bare read grant {perms:?}");
    describe(perms);

    perms = !perms;
    println!("negation stays within the registered universe {perms:?}");
    describe(perms);

    perms = perms ^ (Perm::Exec | Perm::SetUid);
    println!("xor toggles whatever it touches {perms:?}");
    describe(perms);

    perms.set(Perm::Read).remove(Perm::Write);
    println!("set and remove chain {perms:?}");
    describe(perms);

    assert!(perms.is_set(Perm::Read));
    assert!(!perms.is_set(Perm::Write));
    assert!(!perms.is_set(Perm::Read | Perm::Exec));
    assert!(perms.intersects(Perm::Read | Perm::Exec));
}
