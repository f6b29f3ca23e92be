//! FIPS 180-4 known answers, including the padding boundary cases around 55/56/64 bytes.

use hex_literal::hex;
use zkhash::{
    sha256::{sha224, sha256},
    sha512::{Sha384, Sha512, Sha512Impl},
};

#[test]
fn sha224_short() {
    assert_eq!(
        sha224(&hex!("10713b894de4a734c0")),
        hex!("03842600c86f5cd60c3a2147a067cb962a05303c3488b05cb45327bd")
    );
}

#[test]
fn sha256_padding() {
    let vectors: &[(&[u8], [u8; 32])] = &[
        (
            b"",
            hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
        ),
        (
            &hex!(
                "3ebfb06db8c38d5ba037f1363e118550aad94606e26835a01af05078533cc25f"
                "2f39573c04b632f62f68c294ab31f2a3e2a1a0d8c2be51"
            ),
            hex!("6595a2ef537a69ba8583dfbf7f5bec0ab1f93ce4c8ee1916eff44a93af5749c4"),
        ),
        (
            &hex!(
                "2d52447d1244d2ebc28650e7b05654bad35b3a68eedc7f8515306b496d75f3e7"
                "3385dd1b002625024b81a02f2fd6dffb6e6d561cb7d0bd7a"
            ),
            hex!("cfb88d6faf2de3a69d36195acec2e255e2af2b7d933997f348e09f6ce5758360"),
        ),
        (
            &hex!(
                "5a86b737eaea8ee976a0a24da63e7ed7eefad18a101c1211e2b3650c5187c2a8"
                "a650547208251f6d4237e661c7bf4c77f335390394c37fa1a9f9be836ac28509"
            ),
            hex!("42e61e174fbb3897d6dd6cef3dd2802fe67b331953b06114a65c772859dfc1aa"),
        ),
        (
            &hex!(
                "451101250ec6f26652249d59dc974b7361d571a8101cdfd36aba3b5854d3ae08"
                "6b5fdd4597721b66e3c0dc5d8c606d9657d0e323283a5217d1f53f2f284f57b8"
                "5c8a61ac8924711f895c5ed90ef17745ed2d728abd22a5f7a13479a462d71b56"
                "c19a74a40b655c58edfe0a188ad2cf46cbf30524f65d423c837dd1ff2bf462ac"
                "4198007345bb44dbb7b1c861298cdf61982a833afc728fae1eda2f87aa2c9480"
                "858bec"
            ),
            hex!("3c593aa539fdcdae516cdf2f15000f6634185c88f505b39775fb9ab137a10aa2"),
        ),
    ];

    for (msg, digest) in vectors {
        assert_eq!(sha256(msg), *digest, "{} byte message", msg.len());
    }
}

fn sha512_with(imp: Sha512Impl, msg: &[u8]) -> [u8; 64] {
    let mut h = Sha512::with_impl(imp);
    h.update(msg);
    h.finalize()
}

fn sha384_with(imp: Sha512Impl, msg: &[u8]) -> [u8; 48] {
    let mut h = Sha384::with_impl(imp);
    h.update(msg);
    h.finalize()
}

#[test]
fn sha512_two_blocks() {
    let msg = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmno\
                ijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";
    for imp in Sha512Impl::ALL {
        assert_eq!(
            sha512_with(imp, msg),
            hex!(
                "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018"
                "501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909"
            ),
            "{imp:?}"
        );
    }
}

#[test]
fn sha384_vectors() {
    for imp in Sha512Impl::ALL {
        assert_eq!(
            sha384_with(imp, b""),
            hex!(
                "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da"
                "274edebfe76f65fbd51ad2f14898b95b"
            ),
            "{imp:?}"
        );
        assert_eq!(
            sha384_with(
                imp,
                &hex!(
                    "a04f390a9cc2effad05db80d9076a8d4b6cc8bba97b27b423670b290b8e69c2b"
                    "187230011c1481ac88d090f39154659494db5e410851c6e8b2b8a93717cae760"
                    "37e0881978124fe7e1a0929d8891491f4e99646cc94062dc82411fa66130eda4"
                    "6560e75b98048236439465125e737b"
                )
            ),
            hex!(
                "e7089d72945cef851e689b4409cfb63d135f0b5cdfb0dac6c3a292dd70371ab4"
                "b79da1997d7992906ac7213502662920"
            ),
            "{imp:?}"
        );
    }
}
