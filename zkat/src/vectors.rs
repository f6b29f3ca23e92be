//! Literal known-answer vectors.
//!
//! Sources: FIPS-197 appendix C, SP 800-38A F.1, SP 800-38D, FIPS 180-4, FIPS 202,
//! GB/T 32905-2016, GB/T 32907-2016, CHES 2007 and Poschmann (2009) for PRESENT-128.

use hex_literal::hex;

/// Key, plaintext and ciphertext for a block cipher.
#[derive(Clone, Copy, Debug)]
pub struct CipherVector<const K: usize, const B: usize> {
    /// Cipher key.
    pub key: [u8; K],
    /// Plaintext block.
    pub pt: [u8; B],
    /// Ciphertext block.
    pub ct: [u8; B],
}

/// AES-GCM with empty associated data.
#[derive(Clone, Copy, Debug)]
pub struct GcmVector<const K: usize> {
    /// Cipher key.
    pub key: [u8; K],
    /// 96-bit nonce.
    pub nonce: [u8; 12],
    /// Plaintext.
    pub pt: &'static [u8],
    /// Ciphertext followed by the 16-byte tag.
    pub sealed: &'static [u8],
}

/// Message and digest. For an XOF the digest is a prefix of the output stream.
#[derive(Clone, Copy, Debug)]
pub struct DigestVector {
    /// Input message.
    pub msg: &'static [u8],
    /// Expected output.
    pub digest: &'static [u8],
}

/// FIPS-197 C.1 and SP 800-38A F.1.1.
pub const AES128: &[CipherVector<16, 16>] = &[
    CipherVector {
        key: hex!("000102030405060708090a0b0c0d0e0f"),
        pt: hex!("00112233445566778899aabbccddeeff"),
        ct: hex!("69c4e0d86a7b0430d8cdb78070b4c55a"),
    },
    CipherVector {
        key: hex!("2b7e151628aed2a6abf7158809cf4f3c"),
        pt: hex!("6bc1bee22e409f96e93d7e117393172a"),
        ct: hex!("3ad77bb40d7a3660a89ecaf32466ef97"),
    },
];

/// FIPS-197 C.2 and SP 800-38A F.1.3.
pub const AES192: &[CipherVector<24, 16>] = &[
    CipherVector {
        key: hex!("000102030405060708090a0b0c0d0e0f1011121314151617"),
        pt: hex!("00112233445566778899aabbccddeeff"),
        ct: hex!("dda97ca4864cdfe06eaf70a0ec0d7191"),
    },
    CipherVector {
        key: hex!("8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b"),
        pt: hex!("6bc1bee22e409f96e93d7e117393172a"),
        ct: hex!("bd334f1d6e45f25ff712a214571fa5cc"),
    },
];

/// FIPS-197 C.3 and SP 800-38A F.1.5.
pub const AES256: &[CipherVector<32, 16>] = &[
    CipherVector {
        key: hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"),
        pt: hex!("00112233445566778899aabbccddeeff"),
        ct: hex!("8ea2b7ca516745bfeafc49904b496089"),
    },
    CipherVector {
        key: hex!("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4"),
        pt: hex!("6bc1bee22e409f96e93d7e117393172a"),
        ct: hex!("f3eed1bdb5d2a03c064b5a7e3db181f8"),
    },
];

/// GCM-AES-128, including the empty-plaintext case.
pub const GCM128: &[GcmVector<16>] = &[
    GcmVector {
        key: hex!("7fddb57453c241d03efbed3ac44e371c"),
        nonce: hex!("ee283a3fc75575e33efd4887"),
        pt: &hex!("d5de42b461646c255c87bd2962d3b9a2"),
        sealed: &hex!(
            "2ccda4a5415cb91e135c2a0f78c9b2fd"
            "b36d1df9b9d5e596f83e8b7f52971cb3"
        ),
    },
    GcmVector {
        key: [0; 16],
        nonce: [0; 12],
        pt: b"",
        sealed: &hex!("58e2fccefa7e3061367f1d57a4e7455a"),
    },
];

/// GCM-AES-192.
pub const GCM192: &[GcmVector<24>] = &[GcmVector {
    key: hex!("165c4aa5d78ee15f297d5d2eae39eaac3480fc50a6d9a98e"),
    nonce: hex!("0e321e714c4a262350fc50fc"),
    pt: &hex!(
        "5afa41efe94c0193fc9fe62fd6cfacc8"
        "868725ab4965a5c9132d74179f0aee72"
    ),
    sealed: &hex!(
        "5ab8ac904e7d4a627ee327b4629b6863"
        "19936abc709e8c0fb6817cb16d0c4f76"
        "62bfea782d6a05cd04030c433639b969"
    ),
}];

/// GCM-AES-256 with a trailing partial block.
pub const GCM256: &[GcmVector<32>] = &[GcmVector {
    key: hex!("1fded32d5999de4a76e0f8082108823aef60417e1896cf4218a2fa90f632ec8a"),
    nonce: hex!("1f3afa4711e9474f32e70462"),
    pt: &hex!(
        "06b2c75853df9aeb17befd33cea81c63"
        "0b0fc53667ff45199c629c8e15dce41e"
        "530aa792f796b8138eeab2e86c7b7bee"
        "1d40b0"
    ),
    sealed: &hex!(
        "91fbd061ddc5a7fcc9513fcdfdc9c3a7"
        "c5d4d64cedf6a9c24ab8a77c36eefbf1"
        "c5dc00bc50121b96456c8cd8b6ff1f8b"
        "3e480f"
        "30096d340f3d5c42d82a6f475def23eb"
    ),
}];

/// FIPS 180-4 SHA-224.
pub const SHA224: &[DigestVector] = &[
    DigestVector {
        msg: b"abc",
        digest: &hex!("23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"),
    },
    DigestVector {
        msg: &hex!("10713b894de4a734c0"),
        digest: &hex!("03842600c86f5cd60c3a2147a067cb962a05303c3488b05cb45327bd"),
    },
];

/// FIPS 180-4 SHA-256, across the 55/56/64 byte padding boundaries.
pub const SHA256: &[DigestVector] = &[
    DigestVector {
        msg: b"",
        digest: &hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
    },
    DigestVector {
        msg: b"abc",
        digest: &hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"),
    },
    DigestVector {
        msg: &hex!(
            "3ebfb06db8c38d5ba037f1363e118550aad94606e26835a01af05078533cc25f"
            "2f39573c04b632f62f68c294ab31f2a3e2a1a0d8c2be51"
        ),
        digest: &hex!("6595a2ef537a69ba8583dfbf7f5bec0ab1f93ce4c8ee1916eff44a93af5749c4"),
    },
    DigestVector {
        msg: &hex!(
            "2d52447d1244d2ebc28650e7b05654bad35b3a68eedc7f8515306b496d75f3e7"
            "3385dd1b002625024b81a02f2fd6dffb6e6d561cb7d0bd7a"
        ),
        digest: &hex!("cfb88d6faf2de3a69d36195acec2e255e2af2b7d933997f348e09f6ce5758360"),
    },
    DigestVector {
        msg: &hex!(
            "5a86b737eaea8ee976a0a24da63e7ed7eefad18a101c1211e2b3650c5187c2a8"
            "a650547208251f6d4237e661c7bf4c77f335390394c37fa1a9f9be836ac28509"
        ),
        digest: &hex!("42e61e174fbb3897d6dd6cef3dd2802fe67b331953b06114a65c772859dfc1aa"),
    },
];

/// FIPS 180-4 SHA-384.
pub const SHA384: &[DigestVector] = &[
    DigestVector {
        msg: b"",
        digest: &hex!(
            "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da"
            "274edebfe76f65fbd51ad2f14898b95b"
        ),
    },
    DigestVector {
        msg: b"abc",
        digest: &hex!(
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed"
            "8086072ba1e7cc2358baeca134c825a7"
        ),
    },
    DigestVector {
        msg: b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        digest: &hex!(
            "09330c33f71147e83d192fc782cd1b4753111b173b3b05d22fa08086e3b0f712"
            "fcc7c71a557e2db966c3e9fa91746039"
        ),
    },
];

/// FIPS 180-4 SHA-512.
pub const SHA512: &[DigestVector] = &[
    DigestVector {
        msg: b"",
        digest: &hex!(
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce"
            "47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
        ),
    },
    DigestVector {
        msg: b"abc",
        digest: &hex!(
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a"
            "2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        ),
    },
    DigestVector {
        msg: b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        digest: &hex!(
            "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018"
            "501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909"
        ),
    },
];

/// FIPS 202 SHA3-224.
pub const SHA3_224: &[DigestVector] = &[
    DigestVector {
        msg: b"",
        digest: &hex!("6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7"),
    },
    DigestVector {
        msg: b"abc",
        digest: &hex!("e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf"),
    },
];

/// FIPS 202 SHA3-256.
pub const SHA3_256: &[DigestVector] = &[
    DigestVector {
        msg: b"abc",
        digest: &hex!("3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"),
    },
    DigestVector {
        msg: &hex!("c178ce0f720a6d73c6cf1caa905ee724d5ba941c2e2628136e3aad7d853733ba"),
        digest: &hex!("64537b87892835ff0963ef9ad5145ab4cfce5d303a0cb0415b3b03f9d16e7d6b"),
    },
];

/// FIPS 202 SHA3-384.
pub const SHA3_384: &[DigestVector] = &[
    DigestVector {
        msg: b"abc",
        digest: &hex!(
            "ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b2"
            "98d88cea927ac7f539f1edf228376d25"
        ),
    },
    DigestVector {
        msg: &hex!(
            "e35780eb9799ad4c77535d4ddb683cf33ef367715327cf4c4a58ed9cbdcdd486"
            "f669f80189d549a9364fa82a51a52654ec721bb3aab95dceb4a86a6afa93826d"
            "b923517e928f33e3fba850d45660ef83b9876accafa2a9987a254b137c6e140a"
            "21691e1069413848"
        ),
        digest: &hex!(
            "d1c0fa85c8d183beff99ad9d752b263e286b477f79f0710b0103170173978133"
            "44b99daf3bb7b1bc5e8d722bac85943a"
        ),
    },
];

/// FIPS 202 SHA3-512.
pub const SHA3_512: &[DigestVector] = &[
    DigestVector {
        msg: b"abc",
        digest: &hex!(
            "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e"
            "10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0"
        ),
    },
];

/// FIPS 202 SHAKE128, first 16 output bytes.
pub const SHAKE128: &[DigestVector] = &[
    DigestVector {
        msg: &hex!("7216a825029da1"),
        digest: &hex!("9de6ffacf3e59693a3de81b02f7db77a"),
    },
    DigestVector {
        msg: b"",
        digest: &hex!("7f9c2ba4e88f827d616045507605853e"),
    },
];

/// FIPS 202 SHAKE256, first 32 output bytes.
pub const SHAKE256: &[DigestVector] = &[
    DigestVector {
        msg: &hex!("fdbff9bf3fb910a92d25651ebbfba365"),
        digest: &hex!("89f2373e131a899b4ba27f6da606716a5e289fd530ae066bb8b11dc023dacbd6"),
    },
    DigestVector {
        msg: b"",
        digest: &hex!("46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f"),
    },
];

/// GB/T 32905-2016 examples 1 and 2.
pub const SM3: &[DigestVector] = &[
    DigestVector {
        msg: b"abc",
        digest: &hex!("66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0"),
    },
    DigestVector {
        msg: b"abcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcdabcd",
        digest: &hex!("debe9ff92275b8a138604889c18e5a4d6fdb70e5387e5765293dcba39c0c5732"),
    },
];

/// Keccak-p[1600,24] of the state whose lane `i` holds `i`, serialized little-endian.
pub const KECCAK_P_OUT: [u8; 200] = hex!(
    "1581ed5252b07483009456b676a6f71d7d79518a4b1965f7450576d1437b4720"
    "6a60f6f3a48b5fd193d48d7c4f14d7a13ffd38519693d130bee31b9572947e48"
    "5a7adacb58a8f30c887fb19b384ee52f8f269f0dde38730b7f6d258bf5dfef55"
    "6a3e2ceb943e35c8111f908c94f62a2ea69d30ca0cde73e8e2314d946cc2aff7"
    "d715c48c80eaf5a0cfd83e7e4331f55321d2a4433b1f7f7785e999b43ca60cfd"
    "3023d1c5c055c0d4dfa7e0a68ae52fa7a348997c93f51a42880834713010165e"
    "334a7e293af453d1"
);

/// GB/T 32907-2016 example and further published SM4 vectors.
pub const SM4: &[CipherVector<16, 16>] = &[
    CipherVector {
        key: hex!("0123456789abcdeffedcba9876543210"),
        pt: hex!("0123456789abcdeffedcba9876543210"),
        ct: hex!("681edf34d206965e86b3e94f536e4246"),
    },
    CipherVector {
        key: hex!("fedcba98765432100123456789abcdef"),
        pt: hex!("000102030405060708090a0b0c0d0e0f"),
        ct: hex!("f766678f13f01adeac1b3ea955adb594"),
    },
    CipherVector {
        key: hex!("eb23add6454757555747395b76661c9a"),
        pt: hex!("d294d879a1f02c7c5906d6c2d0c54d9f"),
        ct: hex!("865de90d6b6e99273e2d44859d9c16df"),
    },
    CipherVector {
        key: hex!("f11235535318fa844a3cbe643169f59e"),
        pt: hex!("a27ee076e48e6f389710ec7b5e8a3be5"),
        ct: hex!("94cfe3f59e8507fec41dbe738ccd53e1"),
    },
];

/// PRESENT-80, CHES 2007.
pub const PRESENT80: &[CipherVector<10, 8>] = &[
    CipherVector {
        key: [0x00; 10],
        pt: [0x00; 8],
        ct: hex!("5579c1387b228445"),
    },
    CipherVector {
        key: [0xff; 10],
        pt: [0x00; 8],
        ct: hex!("e72c46c0f5945049"),
    },
    CipherVector {
        key: [0x00; 10],
        pt: [0xff; 8],
        ct: hex!("a112ffc72f68417b"),
    },
    CipherVector {
        key: [0xff; 10],
        pt: [0xff; 8],
        ct: hex!("3333dcd3213210d2"),
    },
];

/// PRESENT-128.
pub const PRESENT128: &[CipherVector<16, 8>] = &[
    CipherVector {
        key: [0x00; 16],
        pt: [0x00; 8],
        ct: hex!("96db702a2e6900af"),
    },
    CipherVector {
        key: [0xff; 16],
        pt: [0x00; 8],
        ct: hex!("13238c710272a5d8"),
    },
    CipherVector {
        key: [0x00; 16],
        pt: [0xff; 8],
        ct: hex!("3c6019e5e5edd563"),
    },
    CipherVector {
        key: [0xff; 16],
        pt: [0xff; 8],
        ct: hex!("628d9fbd4218e5b4"),
    },
];
