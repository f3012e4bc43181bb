// -*- mode: rust; -*-
//
// This file is part of curve25519-x4.
// See LICENSE for licensing information.

//! The precomputed multiples of the Ed25519 basepoint used by the
//! fixed-base comb.
//!
//! Window `j` holds \\( [v \cdot 256\^j] B \\) for \\( v = 1, \ldots, 8 \\), in Duif
//! form \\( ((y+x)/2, (y-x)/2, dxy) \\), each coordinate written as four
//! little-endian 64-bit words of its canonical residue.

use crate::edwards::{CompressedDuifPoint, EdwardsBasepointTable};
use crate::window::LookupTable;

/// Table of \\( [v \cdot 256\^j] B \\) for \\( 0 \leq j < 32 \\), \\( 1 \leq v \leq 8 \\).
#[rustfmt::skip]
pub(crate) static ED25519_BASEPOINT_TABLE: EdwardsBasepointTable = EdwardsBasepointTable([
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0x97de49e37ac61db9, 0x67c996e37dc6070c, 0x9385a44c321ea161, 0x43e7ce9d19ea5d32],
            y_minus_x: [0xce881c82eba0489f, 0xfe9ccf82e8a05f59, 0xd2e0c21a3447c504, 0x227e97c94c7c0933],
            xy_d:      [0x55e48902c3bd5534, 0x136cf411e655624f, 0x2d0dbee5eea1acc6, 0x3788bdb44f8632d4],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xc91273fe499e38e2, 0x4fa34ecb3d07fada, 0x2d534d32f0eb0381, 0x6c86031fd43e9717],
            y_minus_x: [0x454cd2b0215a6ad4, 0x4795c0862730567b, 0xf04f11b5d8b71bd5, 0x35dacad334e492aa],
            xy_d:      [0x21fd5459d2cdbd26, 0x9b60b5eeaecd67bc, 0xa807d042059eb518, 0x780d7ad89f5285b9],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x5792d85426774b98, 0x012d4218744325c5, 0x608da8014f80b399, 0x3d0b270dcd407c7a],
            y_minus_x: [0xab308ff4527e6929, 0x9de9a9fef2e0dd3e, 0x4098f98d10a5eb5e, 0x555c8ac3aaaded31],
            xy_d:      [0x0a57499f86e86c3b, 0x2c4a11910e1aed31, 0x68b872a2c6796da6, 0x6d141357895cda63],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x1439a8dcc77e04c6, 0xb3b2e37a3efe929c, 0xe51a469efd854932, 0x7407488190f2c393],
            y_minus_x: [0xcaff028502b40c56, 0x993f44b8ab307d54, 0x61f471e683502839, 0x53c99fa63a22d24d],
            xy_d:      [0x2d09fdf4e23b7f7b, 0x374f1ca2bdae60b9, 0xaeedee7c8815a24a, 0x7fce865fb1aa9f15],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x51095e220452dd90, 0x46a82461e3af7681, 0xee8df5862d5ff622, 0x54a2e678a3710375],
            y_minus_x: [0xbfc8c161d223eb5d, 0xea800a68a59394db, 0xf19e788e5c325043, 0x0aa53f39f58daaf9],
            xy_d:      [0x5e5dedf8c0954139, 0x93870403e85ee8fe, 0x5a0db3858dded396, 0x61d55f34b59ddb4d],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x1d067775bb8ab88f, 0x4d938ac4806457c4, 0xc032db346d2cd39b, 0x68f2bddb51661c5e],
            y_minus_x: [0xa4cc035b3dbec652, 0xabadf14213e9139c, 0x5d842e739022a9dc, 0x1c5b2620d720bc42],
            xy_d:      [0xc2d61933817525af, 0x5f387001a0d0dd80, 0xa9f25125841de0a2, 0x485c748d4f86b0f1],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x358d2e684a2751d6, 0xba381a9d59cee069, 0x38d92941142a1724, 0x630df534941e493f],
            y_minus_x: [0xdd37964d551910cf, 0x365010a99ddd11d3, 0x4ef53b27c90c961d, 0x4eb76eae97298bf0],
            xy_d:      [0x78c1b6e400dc59d1, 0xd981afa3829f524d, 0xa94e20dd2c3bd6f9, 0x3d4fdd8e3507c853],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x2cdbacb3026e9f3e, 0xb65981bbf1443816, 0xd899ce332f6ce191, 0x448af3b030de7297],
            y_minus_x: [0xf153aef6f9c91a63, 0xcb1ebb4070daac7c, 0x9613a0d6371e11fd, 0x5d481250990700e1],
            xy_d:      [0xf3e0faece4d1488d, 0x5c51b8bc45e653eb, 0xb1b2090c875b1519, 0x13483e2e1766274a],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0x97666e873197ce05, 0x28e85b4b3b44988a, 0xa96fdbb5d431bd2c, 0x76e9bea4d007779c],
            y_minus_x: [0x76adb1aa24d528af, 0x5432e24f85e3411d, 0xc2860ff4ada168e2, 0x186bb6b781e98adc],
            xy_d:      [0xb622220b9083725a, 0x7da9eb404946bfb4, 0x5a39cf5234a69f93, 0x48634b88974325d8],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x8653155041ac63f9, 0x351ea571bd102123, 0xba3269d31d88f6ee, 0x41dfcdd7aa840377],
            y_minus_x: [0x3249e213bedf2fef, 0x132ea7d68cd6bf51, 0x87006fe4231822c8, 0x12f30e55f6b37f04],
            xy_d:      [0x1f89f094662c3302, 0xb7ac39f65a2cba3f, 0x505b1ef6e609347a, 0x2b36bc31a2c37116],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xd082a142e32d17e8, 0x36320895798b33e1, 0x34057120398d772c, 0x0a7dd2f9a3c9d915],
            y_minus_x: [0x8b1bd24fce60841a, 0xde472b6ad44de228, 0x8e5af607bfbfe96d, 0x19cbade52f661aec],
            xy_d:      [0x9e6ba30b34c2fbea, 0x2c9f2f4264e4002b, 0x17e1f95b3db0898f, 0x0a414e7541fe2936],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x90f38597a738f65c, 0x732b6edca0523bf1, 0x5fb2ab67670ea7c0, 0x02fe1de229aebdbf],
            y_minus_x: [0xffa1bdc24beecae1, 0xb63a271855275ad3, 0xcf062eb09e42f445, 0x17ece38f2fbac0b9],
            xy_d:      [0x925c59d72957ef65, 0x9a4ab1c6769d9867, 0x19d25e41d4df40ca, 0x5b9bb3a3ae328f82],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xb1a04ae58a1232c8, 0x77890a200b60aa9a, 0x4f1c0a0644885e30, 0x35fac82b98483e46],
            y_minus_x: [0x97dd4cfea068d6e3, 0x59838b37cb7a6813, 0xa1b1f8290af81dd7, 0x4fdf52b61d8c7ccc],
            xy_d:      [0x07d3bc78f0a0adc5, 0x03204ffbdd61d3bf, 0x37a96bdc4d514d28, 0x01290e7b3d31ad2b],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x588a33903b97af72, 0x747c4a58cb03cd67, 0x257c112680564125, 0x000ba9ecfbe6b662],
            y_minus_x: [0x289ff705854ea94a, 0x47cc73ae07efad33, 0xea30c3445ff083e7, 0x1fd0053f389c1676],
            xy_d:      [0x1e349196cb1eed9a, 0x8eef43ed5a4b9c2c, 0x556be8fcd048f942, 0x095aff17d02476db],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xef95be1356b78f49, 0xa5b36991a825c489, 0x46204ee03a8e45e1, 0x37bf49e103cb63dc],
            y_minus_x: [0xb8f87de24b7e719d, 0xb9dcc135d6f9adf6, 0xe9023930ff9462b0, 0x7a4dbb7cb7d89037],
            xy_d:      [0x8fad7b02575356f9, 0x6091a8f8df724e4c, 0xb0d4045af77fb5b3, 0x47e7608780f010a8],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x1ef9694ee2122719, 0x9581073a49ec6f05, 0x3664033f410610a6, 0x609bbc8b37f55c85],
            y_minus_x: [0x3226ac5324ff0f22, 0x10fe575118d6bbbf, 0x81220e2d443fe869, 0x2480d538c1e288f9],
            xy_d:      [0x0458dbaa460d7c78, 0xe707bd3e12314cda, 0xfbb0587c8f036c9c, 0x20ddc43db9368909],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0x3f11a62cbe3348d7, 0xb2444e9e8542da64, 0xed7164861aa57d73, 0x05438f0386354f0e],
            y_minus_x: [0xa0743ea23a21a35f, 0x0ea46d6a0ada9592, 0xbe1d450c509db01f, 0x275b946097e6defb],
            xy_d:      [0x1980dacca5de44bb, 0x39b5d71d2deea130, 0x06b0d6f10ceacf1e, 0x5f7398079342ea32],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xa1fd3ca3c20f3a8c, 0x72e37d2cb1ce236b, 0x50832f0ef18295ba, 0x3ea3e35167dc4818],
            y_minus_x: [0x7ae92af24f3eeb52, 0x400b08ae30858f56, 0x1e4ccbaec970c3e5, 0x49c0abb14bc892e1],
            xy_d:      [0x1fed680a47786b70, 0xce9f3a4d48aa379e, 0x38f63108135dc0ab, 0x0a467ac69a64f640],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xf12b97becd723aad, 0xab61a2ddc479a43f, 0xcfe885b6b4b05446, 0x53c7f5d6a75750dc],
            y_minus_x: [0xa352497b3c9a780a, 0x234cc25f7b420554, 0x2e50de1544b08c2a, 0x5ff97d0f5eaeddea],
            xy_d:      [0x58d5340fc6499cb3, 0x4610ca4e1014864c, 0x9c88a94890ce9e29, 0x20826e817f4e33bd],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xc090a7036d84b55c, 0x90d45b648672279a, 0xb2926095204f157a, 0x00b2dad2477e5240],
            y_minus_x: [0xb9595faf08922115, 0x50fd0619cc519d5a, 0xca65b080fd295b33, 0x16431d8057d7a9ea],
            xy_d:      [0x78c8523a5042353b, 0x8977fcc26697be60, 0x34af14832c5515c7, 0x2c8db3ecdfff645c],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x4cdcd9b8cf8c5aa5, 0xf232f2fd50c6320f, 0xb084089b614f82f6, 0x644da7c338180945],
            y_minus_x: [0x1897868e405a4dfd, 0x2cbca8af55f9f645, 0xb93819e04f780e44, 0x1ef01763e547bde5],
            xy_d:      [0xe91908169d75c96e, 0x70b129da308b5430, 0x9ebf55f38c85d512, 0x64fafddd24b65f5f],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x8aaeb1460f4e2b97, 0xc526c35662c423a0, 0xc8d1a97b28abb1f5, 0x0350d3614433a8ad],
            y_minus_x: [0x984a4d08452de7ea, 0x6e206eb85e3239f5, 0x49614a60983e068e, 0x2b025436e5fd373a],
            xy_d:      [0xb94468ea3e0bb25b, 0xb92a08a07020c5a8, 0x4f818d300c567b68, 0x104c4f44ff13a163],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x8b3a13c5c2f57617, 0x2b10ee03bd6595ef, 0xb205260b30e5fa2d, 0x3985cca87b82cae9],
            y_minus_x: [0x24cbbbfe9d16e636, 0x1942be1652a7ec49, 0xd13cec326903f1d0, 0x4201f68e86533f14],
            xy_d:      [0xe4a5969ac3a762a9, 0x62f36467cc1237c6, 0x7be5a37d0b601ae7, 0x2deba2a184181ee6],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xc2e249908af3bc95, 0x632644d15ee6eee4, 0x4e8f1ed456d1ebb1, 0x2ddbed891833fc16],
            y_minus_x: [0xbfcd68ca94592661, 0x3fb5aa32b19ae0c0, 0xb35c5b3727e0391b, 0x099d3c0039c056c1],
            xy_d:      [0x04b0fa33e365315f, 0x027610eb108ca977, 0x0c11b03bcdeaa3b8, 0x3a06e536ac787069],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0x918d462b823c219e, 0xdbda93876140a1ce, 0xedd54cf571ec83cf, 0x1601fa92b61581ec],
            y_minus_x: [0xefa47703a967e727, 0x61fffd798376045b, 0x82b885955caa2ce2, 0x0b0e92fd4b1f51c6],
            xy_d:      [0xbc878c3abda9d235, 0x983d809867862c3c, 0x98c81ebb92bf7bfc, 0x74ca345edecb5dd7],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x6c6e9ef335548ca4, 0xa428326117e06966, 0x4da412331a7ef517, 0x149f0e273625171d],
            y_minus_x: [0xde8f97a37a6d7f5e, 0xbe77808a523feb7b, 0xe98ffeed2523d9bf, 0x69290cd239c82bc2],
            xy_d:      [0x1bb709a5c9288967, 0xb81bbc5aee50aed0, 0xd822c4d7a30e1888, 0x6db02e223f819411],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x1df4ff637873f826, 0x43352bcf3af1a4b1, 0xaaa1778b0f0ef30d, 0x17897f7a662d5eea],
            y_minus_x: [0x5cb2c02c90623e3b, 0xf3f80806491dc7e6, 0x000092b2817177bb, 0x5253b6e7545759f7],
            xy_d:      [0x852291596fe063a0, 0x0868373fa064d203, 0x63678a20bc67fb34, 0x2f303d928c521bc8],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x5016218e52cb678a, 0xf1e216a05769f200, 0x692293401707936d, 0x100f9989cf22b834],
            y_minus_x: [0x2c598ec7b66f8c0c, 0x1ae7d3a7e1b12c51, 0xf0d9ffa7b3730eb7, 0x2833d655b666eafb],
            xy_d:      [0x7ea93fb58401ce9f, 0x0c58a4b200be0003, 0xea9107581712d254, 0x5cbe5d44312301ba],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xbc0ae1fde409bcea, 0xd330ca106ef09578, 0x7fd4e07c42d47eea, 0x7b8da01160f0e129],
            y_minus_x: [0x18609849f82cacd9, 0x711d50c6f4d4bcbb, 0x1117ea48b90eaf13, 0x119ce9903b37361d],
            xy_d:      [0x6c3eecc3289d17ca, 0xfad64db8fcea6784, 0x6835e18d8f5141d9, 0x598d0c490ccb8d3b],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x1328979d4ebab94e, 0x2de5f1443403a54f, 0xc276e0e088c07be2, 0x4d64b0cffb24d33d],
            y_minus_x: [0xfa8b37a2fda7c063, 0x4e1b63ef30e3bae7, 0xf1ea740dc820ec8e, 0x188b3e35c1deff10],
            xy_d:      [0xf9159c2129258834, 0x28341a1df74e74c3, 0xfe4eb8c225312864, 0x30921b1a0f845888],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xc5b1a4f18d16931c, 0x4eefdb804de9fe9a, 0xbfc5f8dc51d035d2, 0x0a915518bc6c8222],
            y_minus_x: [0x6ccea0edc3a744bd, 0x04ff52f8b603ee10, 0x3c9e9633e807cdde, 0x6375f1184f2f7fa0],
            xy_d:      [0x161c17a9b4b0a49c, 0xed7f204d5b96b688, 0x746419c8db237913, 0x22ff387a82921836],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x31792490644a8a3f, 0x02f803e41fb18651, 0xb7dda2e97ae4ea5c, 0x4b30cfb6dabd1122],
            y_minus_x: [0x6d243ad34b0605c6, 0x2db4683b77871790, 0x03fda8e79e85c7ea, 0x21468b11d071c96a],
            xy_d:      [0x0427a52200d18475, 0xd4110ce1bb52e556, 0x6f5c6f2321e8de3e, 0x4ec0ac96b05e9c63],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0x43b2db4fbdc2e2f4, 0xb7f833c5e8b45d59, 0x1d3873be0e9987cd, 0x1d2fb6a8d857c73e],
            y_minus_x: [0xb09b43ab5306d626, 0x8bf017b575d5ee2b, 0x3f8c9f96a66707be, 0x5011a53bc4f66e78],
            xy_d:      [0x3b6906db38bc5929, 0x038e1a7cea8f68b0, 0x7b15251059f208b8, 0x3e6b411a9e7ff1b3],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xd332e6b034567a70, 0xa16c968c1e6bf1e9, 0xabac9c4e99b012ec, 0x5f78129d95966c7f],
            y_minus_x: [0x05f0d22dec43fd5b, 0x154235195d201db7, 0xecc9080974b73000, 0x141c64431dee04a1],
            xy_d:      [0xe8b5d867a5232818, 0xfd24b5a08ae2bbd5, 0x4167d7457a55a0ce, 0x10ee5c5303541409],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xcd46807d5f3b98dd, 0xc101b03f314f0c44, 0xd966011ba1f9ecbf, 0x2ec206dfb637b3c5],
            y_minus_x: [0xae300223464ecfe4, 0x12a004b76a1551e5, 0x892da6a6097717ce, 0x05e1e840ca518ed5],
            xy_d:      [0xb8371c06984ff0bc, 0xb75816d35cf0b2e3, 0xabdddd4cbed71055, 0x5d213b119560cb6e],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x9dfc60b96da23f5c, 0x2fe7e20fe31416de, 0xc0567fe03ad50aff, 0x43b864f41270d4fc],
            y_minus_x: [0xa5a121964538427d, 0xc4c50cf1efdcf2a2, 0xdf4f8010ce2c722e, 0x0ff8bbe750b6f5e8],
            xy_d:      [0x67b0eccd22dadaf5, 0xc304c2748d9d3c92, 0x7398048c981f1f44, 0x5cf9327ea0a8058f],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xe8cda555ff04bde7, 0xd236fe70eff00c94, 0x61e4844a165378ff, 0x72e31093961af8a7],
            y_minus_x: [0x53d69a0bedf3f14e, 0xdeca1bb515ce09ce, 0x50748dc749acbdd4, 0x0b896b9a34444c20],
            xy_d:      [0xf395c4fc6718c9e5, 0xa68819ab5092e05d, 0x020cd49e970e7f41, 0x517cc00558ce7139],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xa1014feecd377ed6, 0xdc89675f1a52a4a0, 0x3207b25cc3def9bd, 0x20b8d269c2cc655a],
            y_minus_x: [0xb02d1b451f4f7c5c, 0xf1f4e01152a8238a, 0xaa9ea4582f921247, 0x49fa0b66b23b1372],
            xy_d:      [0xfd13ac554ce4a646, 0x118037b7d8005c03, 0xfde948eed6ed29c9, 0x28410a7d2ba5e8d5],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xa30d0adda9e801eb, 0x590814445e79e4b2, 0x93e2bb3ab6341d2d, 0x1d3bac5264365a23],
            y_minus_x: [0x6101348a9f6b7f1c, 0x532d339ca88ebbe2, 0xe5ef1323160a57ca, 0x517cb07637d5d3a5],
            xy_d:      [0x2a4088fb49d7283b, 0x8ed710ef8efeaa53, 0x091246487988af32, 0x2ecfe8afc6f3fa4a],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x9f922695776ba90f, 0x471d481421974b0a, 0x70b25d3b974e0b6a, 0x1de0c3fd23f5cc6c],
            y_minus_x: [0x818a0469b6b1b936, 0xb51bcd77ebe3da99, 0xd4f0c7e2e6577125, 0x59979ac8a7c7df69],
            xy_d:      [0xb6a3808af5436106, 0x4cc55be5b6236892, 0xebbc195a9d3300c4, 0x2286c0e74837dd01],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0xe83a6c4b0e573a16, 0xfc368c7af70e31f6, 0x4bdee2adf3fa7694, 0x665d693cb31d5884],
            y_minus_x: [0xb73ddb50d3102931, 0x552790eba09e4741, 0xb7ab68aaf447ae59, 0x56f12ea5d31a2df0],
            xy_d:      [0x4068c812506b8fdd, 0xe292e1057d94457c, 0xd8d1cba5af9d320c, 0x7ebfde77f1003919],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xe6be2ee2f9e1484a, 0x63c0d14d154882d5, 0xc0630e9b210e182c, 0x27ce68cb6e6c6a6b],
            y_minus_x: [0x7d778f35133593f7, 0x433634626ab9cf8b, 0xfb4517de0d81bb16, 0x6cbaa1af43dbad46],
            xy_d:      [0x8cc94bec353d9bb4, 0xe8682c120d68bd31, 0xdd014e56ae0e060b, 0x3e66e8421c3d0183],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xcd86420c33b06640, 0x66d7003d0d59954c, 0x5446f6433105ed0c, 0x5ac9e54240c86522],
            y_minus_x: [0xee53211636930202, 0xd70a9ea84a41205e, 0xd4e060da7db4633b, 0x6145e876b0e867a9],
            xy_d:      [0xc9098c4d2f424d4a, 0xea6c619ab2ec7d66, 0x46292a2da9fedde8, 0x539cc1846d16b1f3],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x5cd0872605381220, 0x87d12c336abe8def, 0xffdcecdae693ed7b, 0x6b9614a2a49619fe],
            y_minus_x: [0xa161c69421af6a00, 0xdea879b0193c6664, 0xdd83d58d3ced01f7, 0x534acbd75f4619aa],
            xy_d:      [0xe3bfe3a2eb66985f, 0x726ff469f1dd577d, 0x51164418552eed06, 0x3fcc2a4c602de540],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x69ab0aa907dfb1a8, 0x04022d22e7a6fdd3, 0xf76127de439fd061, 0x5879329e6b4d8973],
            y_minus_x: [0x1c24e7444f85f082, 0x4002d68dbdaa5144, 0x1ed1e1cf91fe490e, 0x7b6176238518f982],
            xy_d:      [0xc504649c55608639, 0x230bcdb06d93b5e5, 0x5490600f0737d638, 0x578939f8acb239ed],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x982445ebaad385e0, 0x036b5ad278ea2173, 0x7568d34f5e2cb0b1, 0x1c560ccbf6e2fbc2],
            y_minus_x: [0xa39cfe3e45700eff, 0x7ea93a48253555cf, 0x20ecc54143b94797, 0x6ecf2b956c2db4f9],
            xy_d:      [0x03335a8bd3a8d894, 0xba3e83433f4dc2c6, 0x56566008a2a6ef24, 0x516fe6ce5ff4f34e],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xab762cda081df047, 0x1771dd76692cfcb4, 0x3cbe594a09fae699, 0x47f4c3bc1266f239],
            y_minus_x: [0xc6ede97061868663, 0xd6c7332fd65da199, 0xc7b592c619154b0f, 0x75948b602a2460e3],
            xy_d:      [0x3f6d9a68855d4894, 0xa751e6c11736d607, 0xb3041effb2bc7c0a, 0x66181f983ff8050b],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x94fe01ac06eca280, 0x76693d5237ddf649, 0x89850aafe17153fc, 0x20b58a8d5b8350ea],
            y_minus_x: [0x69851deb0bd94639, 0xe2e9bbdb9cbb9df5, 0x636373c60f352e5f, 0x46b0dc7bc5955be2],
            xy_d:      [0x2b546bf7f4e09b58, 0xde83f2e6ac722590, 0x57f317ed0dabf055, 0x0c8d157ba13bf469],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0x4ff315a1a7a30774, 0x6f6981ea531b03eb, 0xf82910875bd06d12, 0x51bf3edf002a2dc9],
            y_minus_x: [0x670b7ba5e29e0a0f, 0x95cb92e7103976ef, 0x5c5ce1b7dad91f73, 0x7f17072285ae6484],
            xy_d:      [0x009abaf6b380da18, 0x11884a734f85fe88, 0xba99078ac1f23f91, 0x38d7d34cd888aaf1],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x75211e0e239da86b, 0xa8f43d0f9d9c7788, 0x4dc25fafd964df4a, 0x00398fde3c7c4d0e],
            y_minus_x: [0x32e737cd9ca9db05, 0x632c1cf557d0a0f3, 0x07a1affed4fbacff, 0x4108a174e158e147],
            xy_d:      [0xf218638c247c0c40, 0xdfcb06112f67608c, 0x5b6d7041b5dd0af1, 0x2626b799a3f0ac04],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x97866efe4c478cb8, 0x35c8b113d85cfa8d, 0x3763db623bc8bb5f, 0x1c5fca805447cfd4],
            y_minus_x: [0x0c7bf667e0be8fdb, 0xb63afad328a01e0a, 0x6def3895fbf7066f, 0x4c9feed553f23d11],
            xy_d:      [0x0fe9649e1bf443ae, 0x517b0f2d0c68a316, 0xa8407ac11c92093b, 0x7537dccf5f86a4b4],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x7758915adb7211e3, 0x49ceb80879437fc7, 0x485495418ee7aec6, 0x09b7ed4fa162f588],
            y_minus_x: [0xb52360ddab042aec, 0x920b5d9c7c49f84e, 0x6b8e889bc7b8d660, 0x7afbb48a518c4b75],
            xy_d:      [0x7ca66fd8d182dedf, 0x079b25cecffc1604, 0x1543ec52e1ddac45, 0x4110c1a885f46e5d],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xcead3880a1983d36, 0xd831ef4f623ed22f, 0x115dff295f493d69, 0x49c3e220fea02136],
            y_minus_x: [0x257bb31c2f56968a, 0xd0476c40653e2c18, 0x8689d37308108f1e, 0x35038e70bdc03601],
            xy_d:      [0xdae9e1e8c3cbc57c, 0x3915ad1ebf872209, 0x06bda4245da3be50, 0x18b8d935578f6e49],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xd306dbec594523df, 0x535f8a6b0bb85278, 0xea50fc49a9eedeac, 0x7628a5319a2121f4],
            y_minus_x: [0xd49798c84bab2654, 0x7fbddc26113af08c, 0x27aaff1bd243a8a8, 0x110fea439e7841ad],
            xy_d:      [0x919110279d0ab197, 0x7db9f074dd050196, 0x7e706ea620878187, 0x646d52cb7dc92555],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x0a7b0eaee4264bc0, 0x4ca0fcf1f7a0c103, 0xe6fadc479a313bd6, 0x6c641bfd07453cd4],
            y_minus_x: [0x376547332e52ce5a, 0x542392a5971c5650, 0x98d7e384690f0be7, 0x73b6eb7e656c257b],
            xy_d:      [0x867cb442cb7e482c, 0x0eee5df9bdab500d, 0x6e6173bea49aeb35, 0x0e27b9f96352bf85],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xd9b738377e3e1a42, 0xb9efe4da61e0e7b0, 0x758ebce4bc0e63f2, 0x3822cd6dbed7b3ae],
            y_minus_x: [0x873d27de982fd054, 0x414ea6702a6331d6, 0x7a10e1c197f19c24, 0x7cad64068dfb2621],
            xy_d:      [0x0dc8eda4c8da15d0, 0x2b934b11a5816e65, 0xcfefcf728fc63c6e, 0x6ff0b14246710fe9],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0x943cc296aebe5904, 0xdc6f6eb8343ef973, 0xee05ffd590b43c48, 0x15a26021b3bed51a],
            y_minus_x: [0xa72c90a7f0ca4b0d, 0xa4df3ee386b8e6a7, 0x498067e91da87916, 0x23c4ea237e48b919],
            xy_d:      [0x8d0e43d583a75bc7, 0xfd6368c74ced7a33, 0x1f565de6a427c833, 0x3062977795dcd272],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xb815e2e13e57367f, 0x2263b4cdaa524655, 0xf7de202b5d249759, 0x786bb9246cdb33b6],
            y_minus_x: [0x05aec4de1dfec5ef, 0xd835c91be4f9aa8d, 0x87260b586a98147a, 0x485e4e189667e555],
            xy_d:      [0x554574259f615024, 0xcc34cf7a768bc0f0, 0xbca289f2384742e8, 0x71baade9d4bb7a09],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x1ee3880c4bf8d652, 0xaeed3eaf60b2ddec, 0x28472dce07d08107, 0x53b1ba8b9be2952b],
            y_minus_x: [0xdaafd01f15688420, 0x1ab7bac84f731ab4, 0x4ffcf8fedf34dc48, 0x46c660e245e0b7c2],
            xy_d:      [0x814a0169b75a0ccb, 0x785a273f3bda3052, 0xe7d431186a1e24ab, 0x78616ec53d68b373],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x48ea4b3edc76bf00, 0x3a1297856bbb40bd, 0xf204c17006c292b2, 0x595c309c0b529e72],
            y_minus_x: [0xb2b0ca284fb7f607, 0x77173f54a36328c6, 0xcb99e0f9b3f04dae, 0x1707d631b1ca424a],
            xy_d:      [0x3cf3fbdf722466b2, 0x35641d33843c4368, 0xfc4fea6cd0726d97, 0x20bc90ae39ad27a0],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x725719dc9435e69a, 0xdbf7bf5b2aceeb6e, 0x13c58a0fd9e9c70f, 0x18fd42b31120e143],
            y_minus_x: [0x46384a73ebee7695, 0x4bfdc561a3e9ce38, 0x709df019d4836c81, 0x3801a251866ccebb],
            xy_d:      [0xd7c13621171b117a, 0xe09014c3cc19a816, 0xcde0dbf0959c4891, 0x125d918954ca9244],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x20fc06157afc2e2c, 0xb4394261827d33ca, 0x44a2efccd1dd0dd6, 0x468e957cfff5ae8b],
            y_minus_x: [0x58d4768b996f33d8, 0x1e5a4a0c230da4a4, 0x475ea1a1bb67de69, 0x47f71f438f0c4004],
            xy_d:      [0xd4ed455099310f66, 0x985c1150ac9132bc, 0x20020cbdd3cd60c9, 0x4b566bcb8c298ebb],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x64ace362bc43db4d, 0x4a70cf56afc87f5d, 0x0b71273151a17a82, 0x4b2769a58c0b0b80],
            y_minus_x: [0x396fb95796cd8e95, 0xb1a3151b5219122d, 0x9f67503c8b59cb1b, 0x491f077b5c981184],
            xy_d:      [0xa43f6ca60c97f34d, 0xb0d716751d488a89, 0xc3bdfb69dcd26f13, 0x3c6d07e30839f9f5],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x514fc078b4061d4a, 0xb8fbbf0a8d74f3f3, 0x888078ac2400bcb9, 0x02a552598b59c6ee],
            y_minus_x: [0x2df8ae947295e335, 0x9623f18c38780d47, 0x120cd7de036145ee, 0x1692ef7592b58b9d],
            xy_d:      [0xefe423468c933e5c, 0x85943c4e3372a6d7, 0x15758e953337760b, 0x09a3085355bed3b0],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0xe69532f3bbe8fa81, 0xaa44c8c3c7d53078, 0xd8db9dde6d5e0372, 0x72a43c65d4be64fd],
            y_minus_x: [0xa889c763c6fb587f, 0xa9cbed44f2bafa8d, 0x04903d0eb8bd78dc, 0x10817edd15906b28],
            xy_d:      [0xcb4f720282ae7347, 0x9b5e53b40928d694, 0x1d0d7a8bd53ed20a, 0x456b92ed94f6595d],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xff63de064d82b7b9, 0x29bea93473faffeb, 0xbbd7e3312189577d, 0x67b3afa9811ccfec],
            y_minus_x: [0xee2133d8c1a71222, 0xdb3aa25ab8670de2, 0x0d783d05fbe8af6b, 0x6577e7fdb8d01b28],
            xy_d:      [0xe1969b1b020a8b8f, 0x6695f788c4cc241d, 0xc3853756e84a2888, 0x05e65db9515432b0],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x0c36af26287f094b, 0x701cbdc17f744fbf, 0x1de3fb62a83818d8, 0x333c7eb488479be1],
            y_minus_x: [0x8c2f4b17f558d4e4, 0x4373f31ab28a3ee6, 0x58497018ddadb6f9, 0x20127855aceb5b9f],
            xy_d:      [0x0ac37d18b1b431e1, 0x03fb46242b9699f9, 0xa7b9e64fbc4f577e, 0x16a171084756a380],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x10b8bd8687a9bac0, 0xc8a73485898f0326, 0x0ddb43d73a95704f, 0x6105f9d3cda11e37],
            y_minus_x: [0x4bfa898aca6fe944, 0x30aacc2e989fa635, 0x75d09f838422a808, 0x73b593045c696991],
            xy_d:      [0x409c5d328e2d959a, 0x4338db76188d8dc0, 0x3dff8658de189ad8, 0x7a2e97fd4e0678f0],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x301b6fab90e9a735, 0x58edc413ccbdd9e8, 0xe9e104e1e43ab57d, 0x0370adf2a60ee41c],
            y_minus_x: [0xdfa92d0f15e4e455, 0xf52d93041323cec0, 0x6a88e3876f80aaed, 0x4d711e75cb067ae8],
            xy_d:      [0x2db92ec38c994ca5, 0x991a8e5ae758ed58, 0xbee20aa4ed5be502, 0x2c6f6c3093c760fb],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x16fdadd45b6164d4, 0xa47777c77a962cc6, 0x19c04883f8968ab9, 0x045d34b5a98eadec],
            y_minus_x: [0xec0b9bc9f93362ae, 0x6464bb62e622a724, 0xae71c17c5e1361d4, 0x17f9cef42a42fb7c],
            xy_d:      [0xbbf69f7761f7e2bd, 0x82702a8bea7fa408, 0x751ebd1ff8d338e5, 0x090319da4a3e7f2a],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x415e98a3a4890805, 0x6f11bdb6bf37df03, 0x708f3b0c88f53ce3, 0x03a19df1e59c9def],
            y_minus_x: [0x05ca4c3c48b08021, 0x2773d89e7675fd74, 0xb85f39caca785260, 0x1ae9854cda6ac8c2],
            xy_d:      [0xffbca2602e74cbfa, 0x2bae9ef2582e28d1, 0xac19c0fead3b423e, 0x16c39f6f3d7b6d4f],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xd5310170a72efcb7, 0x5106ac8ba80af0fa, 0x8c513ae9dd710eb6, 0x42a1b0c500b00129],
            y_minus_x: [0x8abd18b2219b99fb, 0x7d5c5bf77a5540ec, 0x5849ff737ad32403, 0x573b9b2a383fd3db],
            xy_d:      [0x86f55efa4ba611d7, 0x55378512cee72349, 0x8210165c514d5d16, 0x658a219b1683cb06],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0xcb3e2a748e294e5c, 0x987b134932631afd, 0x13a3d7fa3c090cb2, 0x4b81c20c757b37ae],
            y_minus_x: [0x66625be3db370fbd, 0x220abf12fa8617bf, 0x9f7836fe389f578e, 0x2c17a233a96d31fb],
            xy_d:      [0x6318bde990192672, 0x54082174522445e2, 0xd90f78c5a72d09b2, 0x06150e25e6d146e4],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x76e240a434deb499, 0x86b6c83edf0e4691, 0xe31de9096aae62d5, 0x6d354d98518a6e41],
            y_minus_x: [0xe926e3e8378f821a, 0xd9134f1f6dc3e02c, 0xe8ad81397dd96947, 0x7e2ac5e8e37b243b],
            xy_d:      [0x68760a9269cb2315, 0x095db14561ad1278, 0xd2861d3c8e5e2fd2, 0x420252e5057dd7e1],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xb15e4f0d9520b7df, 0xdae37b9471a82cc5, 0x021a1fec1eaeb4b3, 0x5ca93a8b73fc774c],
            y_minus_x: [0x460fa0038553a1eb, 0x665d6865ad932f74, 0xaba58235b347e96f, 0x231cadfee56ecb19],
            xy_d:      [0x08bfed968d2ecd4e, 0x4e3ba2de68802e15, 0x77ea5f78aa6ab7f5, 0x3b2bcd14f411680b],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x999e5a89a95a1a79, 0x6c191424c9ef4070, 0xdaa89443ba869ae7, 0x01628a5d9513bbe0],
            y_minus_x: [0xa2db473f24e01502, 0x91e6a8d15e54d1bf, 0x9f6b2f88f611260d, 0x61d1c26e4f02ded8],
            xy_d:      [0xb425eaed45f8db19, 0xfdc5e9bf7b5aa5a9, 0x989c8b6bd4d86929, 0x48b04904b0aa402c],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xbd1c2b0b1b4da6dd, 0xbae01653b2ae1ab1, 0x3ee10dfcea78c010, 0x57b1beba48f37021],
            y_minus_x: [0xda268b3494ed67d5, 0xed294fa64209acc7, 0xf4f7b1e5229eaaac, 0x1a8f092de2b4c705],
            xy_d:      [0xea5a4da30d7b3ddf, 0xeb0181bd6455c4b0, 0x38ef70cffcd34cfd, 0x3f8c168373e7154d],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x04a2a5b94710ba91, 0x552c747a6a425c6c, 0xe9ac12a6bfa3481e, 0x22566021920e290b],
            y_minus_x: [0xbd3e47325580b476, 0x65ad252a8af6e2a1, 0x04aa8ce9a3e6876d, 0x33ea56461a1f49d8],
            xy_d:      [0x8e3eb5dda7bd2bb2, 0x459aff6a48c189f0, 0xa56e50e364b5a342, 0x6ab68e418956b8de],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xc0f833ab588df407, 0x87d7fc118851f9ee, 0xfc59682ab54ca32e, 0x44bd5f1c66463f82],
            y_minus_x: [0x0bf7a07186469cc1, 0x18fb839f0ad1fd1a, 0xa790f9e583b9b237, 0x3a3636368ec1277f],
            xy_d:      [0x8624e4c3bf5296d2, 0x2621b4aacdee0ea1, 0x81161c04fbe675e9, 0x2bbf0a51a5f7425e],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xca7f675f5ea6eb8c, 0xfa3527ed03079108, 0x89252cbbe06468ff, 0x7829825c7d80494a],
            y_minus_x: [0xf871345630d39d85, 0xf97d7d081bc8d2fa, 0x60f09f4135b68074, 0x307d3f74b7ebc7a1],
            xy_d:      [0x5b1e8e9aa694b763, 0x79e1829f2fd698ec, 0xb385cac65a5ea176, 0x109cc70650b1a9fe],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0x13cc557cda5baaf7, 0xaf563909ae46d6b9, 0x69675530b0dbd011, 0x4ddfd94274c7bea7],
            y_minus_x: [0x44fa82c51c1599f0, 0x2d715d05d6a4605a, 0x47c9da81d29ed9b7, 0x6d51f6cecad11973],
            xy_d:      [0x32b3bbf4e3ecb2a7, 0x6595892a3963c01b, 0x3282994ceca83777, 0x6503f0a72f44abe6],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x9205ac66e23bd244, 0xfe9c6d6f3223f80b, 0x8cc9469953e43556, 0x6857bd76c257d040],
            y_minus_x: [0xa7720965cc06fcc3, 0xd18aebb79e3763b8, 0x5dd2f6ef492e3bfe, 0x5f85d61c8e989a01],
            xy_d:      [0x3727ef008afb2de9, 0x94cc131090b084d9, 0x3c0102c085d6eb6c, 0x4c90d18b5d75e803],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x6bad56cd6cf9e0bc, 0xab350777b058e0ce, 0x9f4d05d612ae076c, 0x7d824ef6503163fa],
            y_minus_x: [0xc4a117bf6fdc387e, 0x9614b5f5a7bb59de, 0x039c78ea1b6126fb, 0x322c6fa0f139d758],
            xy_d:      [0xee65f1bd1aa22238, 0xbac43c9987f6df49, 0x3c3002618962eec3, 0x7049ee65e14a8732],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x35ef775f3042019c, 0x98cce15b3c07dc2a, 0x4b99bb55db16834a, 0x7718c064c5b23ec8],
            y_minus_x: [0x8ff9cd42c2f0382d, 0x9b6852ec59f39c99, 0x21dcf970b8c7a29d, 0x6be8f5042413d4be],
            xy_d:      [0x773d5b73d094582f, 0x5260acb6c9d445d5, 0x7bda6f415910b098, 0x5b1f4cceeecbde8c],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x178c246e7125d763, 0xbb4db92add5e57b0, 0xc8659e371e77f498, 0x118fcbcde37cd9aa],
            y_minus_x: [0xcb5421e09af70fe2, 0x4bb759aa84726467, 0xda17b400dac66998, 0x24774dbc349d0295],
            xy_d:      [0xae18ef25e61579e3, 0x5825d8187f10468f, 0xdbc6b804e0a7da33, 0x03cdfd4d843c9209],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x79e4f6c0516aa119, 0x855045bc3bfb1ca9, 0xebb6d631e8842a3a, 0x4f7a7d8aca3831b5],
            y_minus_x: [0x71c81d28ed1806fa, 0x421cb2119ed4ad58, 0x769e7896859ab240, 0x01c63bfb4240b8ca],
            xy_d:      [0x42a72f732d8b3df6, 0xacac85214b6866e1, 0x39596f9a4c0810cc, 0x2baf74952505ffab],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x2ea35e2285526bf7, 0x61d78913d299dcec, 0x9c4f1d9315c48361, 0x50050f3f1c17ac0d],
            y_minus_x: [0xea604048450c17de, 0x1870b8614ca44ede, 0x02dd5eaba97b99ef, 0x61ea73889669fe80],
            xy_d:      [0x28c6dcb3f57c9d59, 0xb8de4c4d82b32960, 0x7f15c2ecab38cbfa, 0x42876529328f271c],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xcbd61cbb30733475, 0xcd8cddff0a9d5a4b, 0xa658bcda9a7653cf, 0x30a8e04fd098d72b],
            y_minus_x: [0xe1a18d6f229f864e, 0xf4fa822f7fb81dcd, 0x7e6cbd64f6c23d9e, 0x258773610e2c7a63],
            xy_d:      [0x1d7aae06fef82ecb, 0xee931770155a773d, 0x88d95dc3890b8b84, 0x0ff7927d40078185],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0x116957fa984bb5c3, 0xc6c85c0361692302, 0xee50c4b626f2dd72, 0x14002ff3641a060b],
            y_minus_x: [0x1beb29fd8d5398cb, 0x07ca4a981febb20c, 0x56900584fd9d0bd9, 0x2a26a49497e4309f],
            xy_d:      [0xb577dd4f9a294344, 0x2e0dffca12883ed0, 0x7baddde6b36ca59b, 0x397239498798b6fd],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x03f9fb1ae9953b0a, 0x3d5526c32fb2b378, 0x1e42f3cb94682228, 0x4ff73f8007f0321c],
            y_minus_x: [0x934a90464bc0841e, 0x58a8150591a28770, 0x7eced75301f7ef01, 0x6d4e97461399d1a6],
            xy_d:      [0xbb2982ed01edfbe9, 0x526d79248a1a66de, 0xbda56ae6e9254476, 0x407ca028f70202a1],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xebf7c9dd83d7cba0, 0xac1f68679edbb353, 0x6734cc5fb7058f62, 0x63dbffe92eea0229],
            y_minus_x: [0x469ab591e1e99859, 0x790e45cdd8238d83, 0xd9b618b637215c1e, 0x03ebce3f45f55886],
            xy_d:      [0xc3fdfdce5e046e89, 0xc503359d70f7614d, 0x06ab9215ed8fe0df, 0x0e1a9051af5325db],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x66d437a010b5e023, 0x0fdd918e895e6c3f, 0xda4ab54f0be384c8, 0x5c3a861db368972a],
            y_minus_x: [0xc06929d35e65d1a5, 0x1f30e1d09c1c10cd, 0xc861db00cc4171cb, 0x0e1e82bbae877337],
            xy_d:      [0xb49778a04a11728d, 0xe5e0639e15aefb38, 0x1080a7f3ba267014, 0x0310f163e998243e],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x5bd70bcb586df870, 0x2a6fd7dcf0be70cb, 0x92c91838f4d551da, 0x6ec72c4e5080174e],
            y_minus_x: [0x57cc3066412cc1bd, 0x48752460e34fcd6e, 0x3293241bb2ac0f18, 0x4003eb04bde9d2de],
            xy_d:      [0x605f8eca8421549c, 0xd969e1b1ac47971f, 0x054b0a1c5da8f177, 0x4ac1ebbc1e0e5fc3],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xc801a382664e945a, 0x0e8db3cf7b9662c7, 0x0b7095afdf2dc393, 0x64ac032741e2ac05],
            y_minus_x: [0x76775177aed13d67, 0x2cbe1d0a2ab380ba, 0x64d3150933048b3d, 0x52952f9740f6c7b8],
            xy_d:      [0x86944a13283373fd, 0xfe61fbc2983e4635, 0x0da9ed3c0608897e, 0x43ce0b85ec21d9c4],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xe6eb66a8606ae82b, 0x4d7bb436dd81ab9d, 0x1e53391ff9e1f7a4, 0x33b4606b98bdc566],
            y_minus_x: [0x82837672327d37f6, 0x5f71a18f3102f291, 0x1abca11228dc7521, 0x76f602f1a564fd80],
            xy_d:      [0xca5b12f2f8aae0d0, 0x20bdf9d3ccbdbdc8, 0x61165eee36b59300, 0x68a22f0a6ee6a97a],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xc498a3d595df5221, 0xc629d127c903c894, 0xa5a4fca45f187bd3, 0x4974c8043727ea1e],
            y_minus_x: [0xaba815a59d8a249f, 0xc733ffb5a225de59, 0x5c5eb4938b31c2ed, 0x498c3798f1c94ae4],
            xy_d:      [0xf8864b59bfefdd97, 0xcfcd49af090e757c, 0xef889b621d2dcc1f, 0x3bd971f82e9f4cd7],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0xeacc31ce096ed852, 0x52e8cf9860124335, 0x68be1781ac7e7230, 0x03d0ca8a9704af45],
            y_minus_x: [0x94b7d4e2ce17626f, 0x5e45b0dfa7c279e5, 0x8e3b836c8bd47c84, 0x31dbcafe3d6992ae],
            xy_d:      [0xd41b47811c4f2fe4, 0xc8219d8167c6f21d, 0xd7d0feaee2a09321, 0x1f47f41e8197809b],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x84382646f477e89e, 0xefe28d4719f01b98, 0x52ceaed2893066f1, 0x116b044cd312c643],
            y_minus_x: [0x97c58adc82b8514a, 0x4a792138338422a4, 0xef0e2d70b0ddfec2, 0x3add1dbcbfd62003],
            xy_d:      [0x311cede03866e8cb, 0x307f4545b63ec54d, 0x59c423de75a00930, 0x0482683dc3bbcf2f],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xfa1916b3247ca053, 0x834a97865e96861c, 0x0b3b4bd6d040fc98, 0x712055675d7b9536],
            y_minus_x: [0x5a670fea6edd48ce, 0xe798ed9f63a646d5, 0x9631e631d6c36628, 0x21f10a1fde0eef03],
            xy_d:      [0x7c1a3a4e2dd14ad0, 0x6b4a3e2de51be92d, 0x33789dd3f3e498b5, 0x2b5ed791c6da0656],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x898869b660ce9dd9, 0x031535dbb111c35c, 0x3e4dc2c8ebd0a7ae, 0x01d518a83f0f2baa],
            y_minus_x: [0x1b155cf1fa9a99ec, 0x19c2b46ab75c9ea0, 0x4f070a290ead2ab9, 0x4e925436c1ba098c],
            xy_d:      [0x7a763b247fea6706, 0x7022f5782a56460e, 0xc46912c10e849abe, 0x61d930ee4d75a42c],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x8ca89ec5b64a89b2, 0xca7f38930005fa3d, 0x0146886eeaa7cab3, 0x015a6af1214a04b2],
            y_minus_x: [0xf2ad8f0cc45dbcd4, 0xd04f683ee0bd1ace, 0x58161771301ef519, 0x59302ae7ad93b5e1],
            xy_d:      [0x5a50aae59468c6f9, 0xf56623230c367284, 0x624e7a49b64121c4, 0x13d36404d72e9a08],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x66961385621eb4aa, 0x6ea51f2bb5336559, 0xbcfd2c9234eb81b6, 0x110a81b01ec612cc],
            y_minus_x: [0x45d375e68f86d8c4, 0x1be9eb9d33ad2df4, 0x79176fd18afaac2d, 0x165b38ba7fb050bf],
            xy_d:      [0xacf766fc9c85f0e8, 0x54a11022394671f8, 0x41448e333d4a787a, 0x3d8efa5b9c487a1b],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x2f97110c03fc7ac6, 0x71aaae4fea4a04ea, 0xd95554468fdb5318, 0x3434c122e9a9701e],
            y_minus_x: [0x7249797059d95112, 0x3e364f0315aa88b0, 0x0af5c7f106bfbd87, 0x30fe77932c7e2cc9],
            xy_d:      [0xedd8aec2950c0c3d, 0x79f25569c36ed66b, 0xa25d714087fb6241, 0x2367a6239ed780e7],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x109e3753f8a4c0a0, 0x3e0f3f7c1c95a42a, 0x924461c62b14e75d, 0x0832d57286c662dd],
            y_minus_x: [0xa13292f6cf6272f3, 0x072f6d008b481981, 0x3958d3f965f2e56e, 0x549c3de68a75afa0],
            xy_d:      [0x0e162292ef9006a2, 0x2e1d96eb5fe533a5, 0x0503f3d8f0c1a018, 0x74d0cc73278e738b],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0xf080a21a6e62e56d, 0xa3f6aecb1e427d99, 0x3800cabb76c35073, 0x52d934bde933fcf2],
            y_minus_x: [0xc83159706c8d3c5e, 0x23e4c44e64284b33, 0xcefaa5332028385c, 0x39b4f3549249d0df],
            xy_d:      [0x4eb39ffd89cc3432, 0x1e52fdeca0aee3dc, 0x7027661def939daf, 0x0a10341edaa72669],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x9a775db7e0e62d68, 0xb50d8674cb235645, 0xe9d86d24d335ef29, 0x18f41da0b0e840e0],
            y_minus_x: [0x5a3c5e8f124ee8c2, 0x31061a802f2c6081, 0xfd816997e65d562e, 0x705b1df5fa845396],
            xy_d:      [0x4bf463894f03159e, 0xa4f247a79499056c, 0xadf670a5b78c341f, 0x6ae78f5b16aa818b],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x183b5af1befac629, 0x6b9d5ceef3cce61b, 0xdec18e71a489f710, 0x0d2b7dd5315d0099],
            y_minus_x: [0x2c3c880832e11eac, 0xc5ce8436a84a40ce, 0x712017d48962afd3, 0x334d32b22b8448ea],
            xy_d:      [0x4a1f35a82e4ee4f6, 0x9812abddd3be1b8d, 0x4c39d72b209a3b28, 0x09e241b3cce2c52e],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x626e7db52ec5e840, 0xef75e2762b8d2421, 0xea597441dc72a9b2, 0x285ee43ee472dc13],
            y_minus_x: [0xa11d2ea32d59f0d3, 0x7e09e0c3e3f89fb0, 0x8cfc1b32765adcdb, 0x737c0649d31bdb03],
            xy_d:      [0xb0369bc1b76ff07f, 0x191a9f0af808d5ec, 0x32581d6192db9dcb, 0x4eeab222392fead7],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x614bf300045d644d, 0x3ea67508f570e1f0, 0xf9f1c5f0cff3cbbe, 0x1d1d2287b1d182e6],
            y_minus_x: [0xc7d23ffc19b10935, 0xde4fb56238e6be0a, 0x3738a2a1a4910645, 0x47322c8910cfb997],
            xy_d:      [0x03c79798ec1ca30a, 0x1c4e98c1ef4a5288, 0xe8f1b6368bccb7c0, 0x58c646c9c9d4d43d],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xaeb34f14d58ee9cc, 0xfe490b2c1a16cf1d, 0x2ac28efef9acb9e6, 0x284d20e192ca857b],
            y_minus_x: [0x793a2e81957fff03, 0x864f9e24bf926db3, 0x5e4c69f1dd42cc77, 0x51263e33cd0ea98a],
            xy_d:      [0xdee0376e537c92eb, 0xbc9f79fa320d8f99, 0xc17609404ec19f44, 0x42dff811945089c4],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x3440d06e86e28972, 0x27f386e42252fd7f, 0x0fba4735c7a52920, 0x2bb13be6f700d1f5],
            y_minus_x: [0x9b1909b811e56ffc, 0x2a25678568d667ac, 0xcb3a0824e90d0e44, 0x7c05c661fd152253],
            xy_d:      [0x0f79c55e11a79826, 0xcd2bbfde8a02ef04, 0xaf41528a1a731506, 0x6ffa0c393138dbd0],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xf2eda3f409db4aa0, 0x79ae951da1930870, 0xd60f93749c3c093b, 0x14ea6dc6505065b4],
            y_minus_x: [0x9cc704060bc4edc5, 0xd3b01012f9f3bc7a, 0x7d4c44a6035e81ae, 0x483501ee12d4b35f],
            xy_d:      [0xecd685579999a9e8, 0x1c334ed2d66984f2, 0x1e2bb2c564447bf8, 0x2559c52882965f7d],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0x6b67e8f7afeee04e, 0x74159f7efbabaee7, 0x92eab5ae900b1a61, 0x1820e35d827695cd],
            y_minus_x: [0xed3e1592b3b46ac0, 0xcc60e02ba2116509, 0x78d405eae505670e, 0x54e6e8d6e0445348],
            xy_d:      [0x07f9797cecab70a4, 0x56f3cbbacf9ab597, 0x8d234c5dafb6012e, 0x0825deb40a024d3d],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xd4aecd2feb3ff8a8, 0xf495f34ea663ab40, 0xdbfc01266f10792b, 0x502795107d8396fa],
            y_minus_x: [0x28f87e98b478f6aa, 0x16408ee6ec379de1, 0xa26e2e218269796f, 0x6df4662b849538a4],
            xy_d:      [0x640a1d9e9875d833, 0xbac48aad5eb29718, 0xb29e1e18c7b6ae18, 0x52b87d8be13c8b0f],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x8c9754aa85dc122d, 0xe4737dd447c82868, 0x3cc37516c452649a, 0x120e2fc8ef00c334],
            y_minus_x: [0x1f7d1b3f965b0ab1, 0x7afcb7bb0e6b0136, 0xf4638a1532da92b1, 0x5ee5b2f529818566],
            xy_d:      [0x146c0b94a06f3655, 0xc7df9678116cb99d, 0x8b6bfe6e91ad80e8, 0x0421076eafe6f872],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x81ac61a7027a0867, 0xdb09adad13b70342, 0x2ecb3863f5dc8a90, 0x026b2a7990edc44e],
            y_minus_x: [0x66ff9055c1b17d25, 0xabf08c6a710d1f37, 0xf18bcb0bfe1cf315, 0x06cd29f7de0bb4fe],
            xy_d:      [0xaf3ee08b6ededae1, 0x14aa6f5b46d2ee96, 0x8e5b040b999a5149, 0x653d27930c4c8d6b],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x1261d948d79b951c, 0x49ed413838c0a3f9, 0xeec242b24344cf79, 0x654b18a111f07719],
            y_minus_x: [0xfa538c012fd8afc1, 0x1efb2f9a35ae0dc7, 0x66fe784280700889, 0x48da86266ee98c24],
            xy_d:      [0xd37413a204527feb, 0x39c70bbf4e0abb6c, 0xbb99a45b1e8159f9, 0x27a5e726e735e628],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x987130b7624e85ae, 0x722b38c7e576118b, 0xa475a04df935a7d3, 0x58216772b0acaf9b],
            y_minus_x: [0x538fe72d711212c2, 0x1375392b497ac54f, 0x690d04eb8e751e7a, 0x39fe6e8a5b8e00f3],
            xy_d:      [0x213f383ca24dd617, 0x42ad71b6de711885, 0x26573b10afc20d3e, 0x5c4f3a064d4e70eb],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xe4debc7b2b875614, 0xf2ad859913c8ce70, 0x32fe1f55d0cdc8f6, 0x12e212f2eb131b48],
            y_minus_x: [0xb27e59d71a6e5ce7, 0xcba80191f1a46856, 0x22d9f83eb1631c0d, 0x30aa29bca32d33c4],
            xy_d:      [0x1f9f035378ebef37, 0x9f7cbb13c7031184, 0xc60a7b132745363b, 0x329cd0448aa423ac],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x6ee26dea0a5da503, 0x8cd95e1e4c2127c7, 0x24544feb9b6538b4, 0x47b29907780cdec8],
            y_minus_x: [0xf4e90fba61e97bb0, 0xe0a82a2092e23422, 0x31272e747cdccf19, 0x48e2f25562e68c36],
            xy_d:      [0xea4368d8e57ef063, 0x279ff3718b1da8c0, 0x2cd45786fd7949cd, 0x2655e3def6198395],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0xe047bc479fbc693b, 0xff18539650a026cf, 0xf93bc5fe67b2e64e, 0x7f724c0b2d659010],
            y_minus_x: [0x11cf4b12044e0517, 0x63a462601d7f239c, 0x0bedf6953b27d095, 0x31cdc9f8190e42c1],
            xy_d:      [0xbdea8471c888d0d8, 0x9595c86a40483a44, 0x73e9576157397e8c, 0x476fa49e42db0153],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xb3b3e269423b2080, 0x5048201ffbfafc1a, 0x8e47e7fd65735f6f, 0x4260062a68efd1b4],
            y_minus_x: [0x576640ac2ccdad34, 0xf52ba787f5d6f107, 0x27f20eba115b3f83, 0x201dc97180cea7da],
            xy_d:      [0x26e117c0c5a32e7c, 0xb8d079ad0a4077fc, 0x57745fd68263eb2b, 0x1aadd8955930bb7a],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xd180ed63ad46398c, 0xf6c801ced9e75508, 0x3783be5f9dd71f96, 0x3a8c757c702956c7],
            y_minus_x: [0xd38f32663a49ddfa, 0xf2dec26cf651d861, 0x0535e2867d02f3c2, 0x07cdc0990c176189],
            xy_d:      [0x52442ce20dbfb619, 0x8796b05e7a1c194c, 0x0c0ad494e4d8e8ec, 0x23e1c38ddd8baae2],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x7df32ea864283358, 0x3176625859d14cd8, 0xf29baa75220d7470, 0x047f5016746a46af],
            y_minus_x: [0x28a229cbb8f627a4, 0xfc02d8bee4c62eb7, 0x7bb1608d23e1e335, 0x005c4dc2bb234cee],
            xy_d:      [0xc126eebb346f7568, 0xe432229025b42e91, 0xda8a67e6aec4eb32, 0x239c14d3a7baea9b],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x91eca99d569c815b, 0x32616ee77781ac47, 0x0a92b9c867f097da, 0x763345a6a27269c8],
            y_minus_x: [0x41696d3aa33ce20c, 0x731debec5930c6f8, 0x1aaf77925623f585, 0x103c34262419e35a],
            xy_d:      [0x9da46790bd3c4106, 0xfbb5055940939f4b, 0xd4b632d3c64776bd, 0x3a08d302a7c5219f],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x2bcd729e8c58bada, 0xb43898acf9c95081, 0xc22af65d0f779afa, 0x0f64d43922c61cc7],
            y_minus_x: [0xa6b2ce995ccee42d, 0x02266e3ab01d788a, 0xd9a638966e617244, 0x7e09b2ba7dc09a7f],
            xy_d:      [0x5c73526a00512844, 0xcdc0eb8105e4415a, 0x2bf3e64df8cabab0, 0x5d6ec452e3e6b230],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x42e14c6a2c9c9823, 0x47bf1acc2ffb2cf6, 0x0e965115797b371d, 0x30dd0898d2035390],
            y_minus_x: [0x55c4abb85b1aee79, 0x816ff7b67b360fde, 0x42a981345f5b68c3, 0x124c94fe6643cf3a],
            xy_d:      [0xd1e850788b4ac80b, 0x811db5b65d3f5ec4, 0xbdf8ad1f133c1983, 0x6b1018865dec7673],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xb3235afa3bf142eb, 0xa0747fb3b647b0c9, 0xd3763988d5daca6e, 0x3f642379b2c67626],
            y_minus_x: [0xa944c9a1a49a6b18, 0x5cedfc035289117a, 0x47b6c3c7e1fa0e11, 0x5bb3b51526cecb98],
            xy_d:      [0xcdaf479f8ed1175a, 0x09878ebbb600e689, 0x90a647e7d14c4fdc, 0x76d57b919ccdceea],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0x2c1d825fd656c751, 0x94dba1f40a45f442, 0x158f2c1d840862ed, 0x15aa24f2c759ddd5],
            y_minus_x: [0x2f9d3ab1759edf1a, 0xfbf51c2a475ed05c, 0x8061f298a2ba394c, 0x498274f38b13eaa8],
            xy_d:      [0xbc4c0a69356e4e7f, 0x1e0dd59fc5a46e85, 0xed07f0fffcbce305, 0x22346f16be16eb49],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x25cd6c637c3183e7, 0x10889a98a1ae8614, 0x6a543362b2bd3b96, 0x2ed3213f319239a9],
            y_minus_x: [0x28dd9aaf4a0ca34f, 0x19f36e2611eee3aa, 0xc9d2db6b223fccb1, 0x36673e37fda25eb1],
            xy_d:      [0x0d4a63446f561165, 0xdc83377bddd70ffc, 0x4456c61c46acac07, 0x2c794d5ff3cf9654],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x25ad325fb88766fb, 0xd8a6729c2316149e, 0x1b21e82b6a859d5c, 0x357c9b920c2da438],
            y_minus_x: [0xf48767d5c6f39f34, 0x2a01b7cf9bbf3b52, 0x7824ad85df00acc1, 0x2bbb14e253fa0f1b],
            xy_d:      [0x9910012284e35444, 0xe9701b09a5aac4b9, 0xc1f11b119e19944f, 0x380f92dd865760c7],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x4e8c7b6cbe5f6080, 0x422503733a5fedf2, 0x907ada915627306b, 0x79052de0284aaf28],
            y_minus_x: [0xe1d4587c7230b66d, 0x7b8033074f12d43e, 0xb0f1830ffa5e52ce, 0x5706495fdee205f4],
            xy_d:      [0x061f84a1cdc02d11, 0x7427459bb12155fe, 0x348a0bf9ae1149a3, 0x474dce5d8a277876],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xc6f74deaaed8df77, 0xe4e1d59b85391fdc, 0x225478df8e346bc8, 0x1b36a20c8e7e9e6f],
            y_minus_x: [0x7ddd6a47fdab904d, 0xf740c8b5edfc8687, 0x6a4098a931aaa1df, 0x510882759f99bdec],
            xy_d:      [0xcf1e0ba1f95e460a, 0x976d137e5ac2b61d, 0x665c17873453fdcb, 0x20b3d2735e2c9922],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x615f1332fc6747f7, 0x74b3ff8a74406b16, 0x7897373f179b2777, 0x1a5999b865bf697b],
            y_minus_x: [0xb21dce943b7b1380, 0x2e8ecea0073b3475, 0x0da5a18190fe0342, 0x3c9c5dbf112a9235],
            xy_d:      [0xe6e2c8f74340eb66, 0xe701084e76c2d3a9, 0x76ba42e0ac404441, 0x08bb7e3716ff32f2],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xedc87144a4bb875c, 0xcc7de615567a2051, 0x109aa7ff6f6bc3cd, 0x0fb51f2a7934835b],
            y_minus_x: [0x5a57b6682dce30c4, 0x16efe4fa5952c240, 0x1ea7d28175f4a6e2, 0x447e1d2633beaf9a],
            xy_d:      [0x305260cce9839a75, 0xa06042db188b2e6b, 0xf1199f11fbacc14a, 0x2797d6808b5c8068],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x4b166c8edb9ddb1c, 0xf302bbd57e094e04, 0xb7b0cd9cf9db0b44, 0x1a28ccaf94a27740],
            y_minus_x: [0x225f5920ca57272a, 0x2faa0e288c2bf7b6, 0xd30f35969b46824c, 0x222a42524b977bd5],
            xy_d:      [0x48a97e684ff53ebe, 0x2540b64a5849ae7b, 0x92c74d5523942e20, 0x085c4e53021449db],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0xba9ca0df2d22f837, 0x683e5776b6ce2fb2, 0x88bbb5ce397fa8db, 0x0be968ecf786a6d4],
            y_minus_x: [0x1eaca3a4cb8c144e, 0x8975fc6292299f93, 0x01315fe58a61f78a, 0x105c3c6abbdba8c7],
            xy_d:      [0x93f9578c039f9f35, 0x7e9ff28ceba90834, 0x9171db961e530011, 0x3910a7b1e632e353],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x8ecedbdcfa1d94db, 0x6b02c12527a8c7ba, 0x7960395e9897cee2, 0x4f925642ad0aa2d8],
            y_minus_x: [0xda71bfa02983d340, 0xd5d38a6b9799b3ca, 0xeb7de853b9bb084c, 0x6fefa462c0b8e5e4],
            xy_d:      [0x126b0419474a82d5, 0x23a460e8860a1077, 0x63fff22e037d92d1, 0x005d39cf1571caf3],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xd722137af5445d93, 0x1b033cecc24b9dfd, 0x2e4f81861334a728, 0x3914bef3ea8c6913],
            y_minus_x: [0xac974c6f2e43c86b, 0x72dfdbe9a2e1516f, 0x88ad1db07cda4c91, 0x01941d1f33d6bc79],
            xy_d:      [0x24120ee3df065c93, 0x1978cda6c5b19840, 0xe9efe48681144984, 0x42f094b423138ca2],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xd6dfdde4121622a8, 0x5e640676681840ec, 0x421ab3537ae46fc9, 0x3c6792e9c12c6726],
            y_minus_x: [0x5d41775996ce24ad, 0x6777e47e7895dcbe, 0xd816d5d749dae8f0, 0x1ce0064e09b4c6cd],
            xy_d:      [0x8ad735c718a44eb4, 0xd5428e55ce15f843, 0x64d3ad4bf8277d02, 0x0035a903b59ffc19],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xfae5bf0b5ce7040d, 0x9a03f8a620bd5e14, 0x6a59b5e715fa53d5, 0x7ef174ab0d4fbae7],
            y_minus_x: [0x14f067f0cecabc0e, 0xdb40ef8c4b318871, 0x2bef9ce9b828b59c, 0x26abf1a21de3b091],
            xy_d:      [0xef386a7a5b52af5c, 0xa400a93faec2edcc, 0xede4e22069f74d40, 0x759548578d3014f6],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xbbf5f9922dd96c05, 0xec180da397dc83cd, 0xe323f37926773999, 0x232c096413b61084],
            y_minus_x: [0xb491fa7e4d730f42, 0xab9a940ef01fafe8, 0x53b25721f376e896, 0x6fec7a74e8969f25],
            xy_d:      [0x26a1df5915083163, 0xb832fdba9c18ee0b, 0x0c06a53def14b46b, 0x42d996158e58b3c8],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x7bfe52163d6ac0c1, 0x990a14372199f9e6, 0xdb614e869a05cbce, 0x58bb8d242b3983f0],
            y_minus_x: [0xe4602f666926d475, 0xd0e78d5602eff7c1, 0xeddf77f93efce6b0, 0x5daaab51bda38f4c],
            xy_d:      [0x1958629270a6ea41, 0xf6d9a8aa0d15d25b, 0xd1e8b0241415ad79, 0x27e03ce93d399b75],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xee1a45a20643627d, 0x899be5e4e64a7328, 0x32117ba6b21f1e5c, 0x5208b8615d71e684],
            y_minus_x: [0xa8e49c5844df97b6, 0x924bdeb2816ff4d3, 0x7fffe04e3c407229, 0x4922b3e7657cc749],
            xy_d:      [0x9ffcd5c3056239da, 0xf8488ef70089f21a, 0xa573a83075e36257, 0x1fc3094b36438006],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0xce0c7e7d1b024680, 0x148aced9b9c4ceee, 0x6e4f9a85cfc96855, 0x537abf7743c50cea],
            y_minus_x: [0xaacd0664bc1506ef, 0x2a8ee6d97538c1c2, 0xbfb1432d98f791c6, 0x282553bb3cb9b09e],
            xy_d:      [0x8655966aab43f7cf, 0xa8c068b1123d78bd, 0xc2e0ad1a27ad1233, 0x6020ca1ecedd1834],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x2590bba1d1365565, 0xa3d35a1232455be7, 0xe58ea7bd01fde4f1, 0x496c98a14c00680c],
            y_minus_x: [0xe1e0775d21f5e64b, 0x46ba4e4e13754e57, 0xecfd4af70e3be663, 0x0a1050ecbb421a07],
            xy_d:      [0x80633bcce99bac9e, 0xaf1e28a0591d523d, 0x220c142a71aff9ca, 0x4da7c918a1acd009],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x99e79818524c334f, 0x128fb9e910afa42c, 0x55c1552028ef7a7b, 0x6ff8c8eab7cd11fb],
            y_minus_x: [0x1f2e084ec48a849f, 0x1ce77d4896f4b4b5, 0x1075721fcbaf9810, 0x51cdab953f8996d7],
            xy_d:      [0xc0cf6a19d616c834, 0x9441d5bcafe4c291, 0xf7a2b9402ac9f59e, 0x010629353ac79b65],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x7498f7acf821663b, 0x962c4e4ec70925db, 0x56e470c55763accb, 0x62967f052b016286],
            y_minus_x: [0x3bcc1a7c4f6c6dde, 0x6479557cee3e5236, 0xd4a9266e51f0d83a, 0x015566230a989c3b],
            xy_d:      [0xc3507bd0323c3be6, 0xdde2321387303e4f, 0xd58bf512f8fd88e4, 0x667dbebd9825c3bd],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xf1434ce14bc4f789, 0x15b766b8efab8c86, 0xe1a1e42bf664b868, 0x2d8ea65e21a69d62],
            y_minus_x: [0x395a1eb65c4dbaff, 0xaa634a6cce356e40, 0x5c61d51b9f71a64f, 0x0a5a31159c83a9b2],
            xy_d:      [0xdb7d930ae6054f93, 0x9d278715dc46e672, 0x8980a4c599b4d382, 0x17cc7b892c2c96e8],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x1709572227aa5377, 0x7e7f1f7854e5ebef, 0x675fc486bac1aef0, 0x4ec03174f3b0a2aa],
            y_minus_x: [0x064a53a65a87cf2b, 0xad8ffa54c7470990, 0xcd156610c11807b3, 0x1d357124ec03557c],
            xy_d:      [0x32bd6d42d4c83e2d, 0x8d07545ac8dc87b1, 0xc6870efdef9a5a74, 0x14c5c67457792ff9],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x41bd39750510b2ef, 0x1fd583da05e7bcfb, 0x290b1b63bb9c5738, 0x35d3138c01d3ebee],
            y_minus_x: [0x15493ca9f7fb8659, 0x25c4e4953c8ab83b, 0xca0c22bd1853e7b5, 0x1a5c542026ae7242],
            xy_d:      [0xe137765ac1b49991, 0xead409efb1daff7e, 0x5149d54d525912b9, 0x78eb15eea32f0e35],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xe696daed58fbaf71, 0xebbfcae78b5832fa, 0x8a2b8ff51fa4f842, 0x4e199b109315959e],
            y_minus_x: [0x3299e61469bc6fc0, 0x7b6da1bc8507d25a, 0x71b22ffcfb80ed2d, 0x3a6af98bf98b95d2],
            xy_d:      [0xd437f2aa33ece537, 0x9cc5be3a9594c61b, 0x6d36844971d6311d, 0x6575e622a3f4ecc6],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0x05a046cf39aa5b08, 0xc0359929add42db7, 0x6df31d01a52c5103, 0x0b9deceee4d0ef96],
            y_minus_x: [0x0978038d93b680db, 0xf3dc5d62c3624638, 0x2984094db8eb7dd4, 0x6ec47dfcad1edbc9],
            xy_d:      [0x95a8078f7f2c3966, 0x2c6b2c176a1c8c60, 0xf37693c764b39d70, 0x4370e689d8cf518c],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xa395d7b14f2d81a0, 0x9dd505c813c68223, 0x863c2fa34b21df93, 0x7f9d350d46c1bd89],
            y_minus_x: [0x206856a8b78b3788, 0x08c719498fd5b55f, 0x1ff1af0a50268447, 0x5840301a9370b133],
            xy_d:      [0x7bf3221cae9ebffc, 0xcad46aaae480f6fb, 0x3466bc182c96319c, 0x58687ef69728983f],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xce5a4b8f345c23a8, 0xd04ab914b3325de7, 0xae46f393397d2095, 0x230a8421a8e2c4ec],
            y_minus_x: [0x702ca68d790919d0, 0x8dedf3c7786626ce, 0x34b28c3fc7a4cd3b, 0x45490a101604cc34],
            xy_d:      [0x5e480ce0575cd017, 0x2ae388868b01a657, 0x0736fa80b2cc9976, 0x1de506944ae52eff],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xce34475b4f6600d6, 0x785e41d6d32244b7, 0xe516caafafbd4ff1, 0x67545a01c6f94120],
            y_minus_x: [0x207818de1e2eb152, 0x8cfe459f67f83d30, 0xcc0c1ed10987daa2, 0x2b18ef6ed74789e6],
            xy_d:      [0x9576a30578e56901, 0xa3182982d2467741, 0xc890bba2a4f88d2f, 0x126704982a165231],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x1fe7d0aafef985b9, 0x697b8b471b1b9752, 0x5970326f32497c22, 0x6a4c94539927a140],
            y_minus_x: [0x0ff4487afe836083, 0x5ae2341aaec40879, 0xc13c047f3746579f, 0x20ea71e145036ba5],
            xy_d:      [0x79371953b1f70d17, 0xd748f25be92ffef5, 0x5e1de99de8bfa6b4, 0x248db36f606e7fb5],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xbaf82547686d3247, 0x76911657b3f11425, 0xc11a51bc8fbdbdd2, 0x667b5c585b80c5b3],
            y_minus_x: [0x4c7ad89ee3f5194a, 0xf1eafc663f0b6dcc, 0x56055fa965fc6ca3, 0x44799c68642f7256],
            xy_d:      [0x61c1d410cc8d39d5, 0xd593de00ef99063d, 0xe09e998dc23bb831, 0x6986a5417583c54c],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x36b4b9a2b64d5fcf, 0x12bfd97e24805440, 0x95d67a096467dc28, 0x06d9f3f0065fdead],
            y_minus_x: [0x00261b1870fca409, 0xbf16bc134655a9ad, 0xe3a41191e6427fc5, 0x72f53a9f880bb85c],
            xy_d:      [0x9eb37e1f7104b1a8, 0x40eb163fb0dae5b5, 0x87df022109a21d8d, 0x4152760c90f0d0ed],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x7ae430b178e7bca6, 0x08c6430c93772bf9, 0x8b9092428e031abc, 0x5b6895aef6033fe7],
            y_minus_x: [0x2e7312cd1d925c51, 0xdc2bbd6622d7d05c, 0xe665f37445d0381b, 0x1e8a1e28893c04df],
            xy_d:      [0x093693c8bc8aa2a2, 0x6af247ae7e3c1d05, 0x9b5edb746f8bcdd6, 0x577a8bc42dd4142c],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0x4b775ffd982d979f, 0xe9fc9c56c44acb5c, 0xf87a96e3a36aee92, 0x6bcb41485d9d004a],
            y_minus_x: [0x231bcba7462c576e, 0x5cf7917dd5f820d2, 0x70c2ecab74c038c5, 0x178dbc7d58a1d453],
            xy_d:      [0xfb8d5c2185107077, 0xf9c9b2c692787623, 0xe7ba84d437717768, 0x7ee21f1aee1551f0],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x2d3c152e139f4b8c, 0x1abb634caf277eca, 0x87976c028f91be9f, 0x0227dc0ec16a854c],
            y_minus_x: [0xc2cb3332c43eecd8, 0xe487cd98a5d829aa, 0xe37046fc77903cd8, 0x7f7b900b3ac66097],
            xy_d:      [0xe0ef8c62d483f1e3, 0xabd99b8ee72631ac, 0x6538229a5900dda4, 0x7fbcc11fce186e97],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x354e0ff8347ac3dd, 0x8413c4a70028646f, 0x1e5fccaabef6adf3, 0x3254d8218e036b78],
            y_minus_x: [0x419a691cd1da89f4, 0xe09b386a5c8fd46c, 0x095aa09b7ac85e99, 0x052701b9ebc26cda],
            xy_d:      [0x9759eb50adbe9483, 0xd85a7b506a9d411a, 0x38ab6721c4d22ea3, 0x438d3e85670c1a36],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xe6061aa91070a20f, 0x06b2ca8384d8a8a0, 0xcd7ab10d904eaf9b, 0x7e34de7bb0bbaae9],
            y_minus_x: [0x698396d56443dcfc, 0x80931482dfd2b177, 0x67aa18016077bb45, 0x561de638a3753f4e],
            xy_d:      [0x83f86bf5827414a6, 0x886d8c1297a879be, 0xf4a8d4d18b8bcc6b, 0x77ad4d399156528e],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x7394ea75d1eca25f, 0xc6cf04a0403c57cf, 0x2292ab3d23c34e01, 0x0155cb4077469d92],
            y_minus_x: [0xc5d0800617a0e359, 0xe24fbce0867f7dcd, 0x277d23b81e628e4f, 0x64a710d170a3d7e5],
            xy_d:      [0xf7d24542eef286cd, 0x90cd112707dcd124, 0x7d048f8eec8f7b6c, 0x35aebb65f5235d9a],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xf07ca08b8f3c1291, 0x78f3573a01b49b69, 0x20459f51687e63a3, 0x0b7dc34e01ee989f],
            y_minus_x: [0x442baab676066cca, 0xb2396e37ae680edd, 0x5780b48a47a15a3b, 0x057199fb4293b9aa],
            xy_d:      [0x94470ccb99db04b1, 0x127e395a6c55f099, 0xa408fbf684c8e81f, 0x1fc0f1c5c7b8683a],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x056dbf9aaf8be412, 0xba5c91e1eba14cd2, 0xeabe1f45e5fc757b, 0x0569f169a66f6e1e],
            y_minus_x: [0xbfc887e63f6cd7ff, 0x2a2e5c509232c3a5, 0xd41cbf6925862382, 0x282887e0827a84c9],
            xy_d:      [0xb78607e299b71245, 0x3a2f6f0ce198e7ec, 0x796b7e8004f77f0e, 0x493e0ac5f87d0f5f],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x6f5147e25728dcba, 0x0eccb9e9ba26ff4b, 0xb1203405c39c2454, 0x276c123ce8b3efca],
            y_minus_x: [0xfb0cbe21174c3cd1, 0xd2256eea29651b23, 0x4da09fe0a5a75665, 0x1aa77c3e83f7a7b4],
            xy_d:      [0x7f71da913062ecb1, 0x281a977e75a0d85c, 0xc404561854fb329e, 0x5816c969029c91b6],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0x96de37db727078b2, 0x0270df94d25eb549, 0x2f0cb36a3c3d7b74, 0x476e2faf5a136830],
            y_minus_x: [0xbc09e0d15e521415, 0x76b17848d0c31eec, 0x5763de5c61347d43, 0x4872e9dbb78e5726],
            xy_d:      [0xaa29dfeb29ed472a, 0xf4ee0f761254fb20, 0x5fc3931d81abc511, 0x62da36289b0e5d39],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x674ea6eec53ff1f2, 0x5589b22b3b310718, 0xa5aca7bdd9874cac, 0x2e0e0577990914ef],
            y_minus_x: [0x54a0155f98a7bfc7, 0x712bf8ee47467a28, 0x8eddeaa591d45f42, 0x50bbdfd1b6e5b89d],
            xy_d:      [0x9b840dde7d3cedbe, 0xb024408f612facd9, 0x843d3b32ce419243, 0x65730c9c3ec55add],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x3088bf224c2dfdb8, 0xfe70231538cb189b, 0x41d61a246a12c825, 0x7ab42d5f2dd21eb2],
            y_minus_x: [0x46edfb5529a25197, 0x3ec4755a5a0da03c, 0xaf5875cba50986b0, 0x0d006c8d8bdf9f01],
            xy_d:      [0x374b0499f5b0f959, 0xaa1e87d464ffa4a9, 0x6fb93a883d7b32b4, 0x09aa94db11d87355],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xfae38b5e711741ff, 0x5a15f58cf404c2e0, 0xf64ed31b8a12a557, 0x2cb975028ac85309],
            y_minus_x: [0x8c786debd6e8ea8c, 0xcbcfbc4467e08f88, 0xc39970f8388a3acd, 0x3cdadc0d32e51d00],
            xy_d:      [0x07ea56106e47bbff, 0x4d4d694a5626a7d4, 0xe00d96b2599b021a, 0x67bf4e4ac82f9ded],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xb8e4221e9aa94cff, 0x45e69d8e6df5f56b, 0x404924cf78d24a33, 0x0ca1776250a256e4],
            y_minus_x: [0xb133a5de2bc09817, 0x6c29079cc4d6ee07, 0x4614ccd729fdece3, 0x18cc9d6c9731c726],
            xy_d:      [0x3ed6298cd711a4c9, 0x160d9ec886751f49, 0xaa9e724a129e0891, 0x15053298a77ce53a],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xe79b0d669e0e3c9d, 0x97cf5e562d1ade1d, 0xb0743074d466d355, 0x02aee1cdb6f50d09],
            y_minus_x: [0x96dbc9bffbfc93e1, 0x6dba0f830be8531a, 0xacc179d108aad7bb, 0x267b710c323e16f6],
            xy_d:      [0xd88c913e6146addb, 0x83f1275e3ba6ffd5, 0x541e3c6772519644, 0x090d183b8855125b],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xeb2cb89f63ba41db, 0xc45ff03bdc15cb57, 0x944f1411884bde69, 0x693ddca536769d4d],
            y_minus_x: [0xf26daeaf4f81a542, 0xf0a9fe04981a5e16, 0xa302a348caa8e9d8, 0x599fe3b63d207296],
            xy_d:      [0xab1ecc954cada417, 0x9a02e83e371c1c00, 0xa4281aef17b26c72, 0x35c4834d9053d4fb],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xa0417d465ae3edb2, 0x0343437c639a60aa, 0x94f3646cfb73d2bf, 0x4239e98453b1cde7],
            y_minus_x: [0x40955020b13810fd, 0xccad44fd7c922da7, 0xffd6e26728397782, 0x51de1081d539f5b9],
            xy_d:      [0x65773c9301ac4ef9, 0x95a5a109236e6249, 0x0150f7ba7300d4a7, 0x4817b9dfef021a0d],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0x515a6d705aa88e4d, 0x3d64301495ffff83, 0xcc0f9baefaa8211a, 0x1fb5eb92ed275096],
            y_minus_x: [0x758c5cd5bfaba2e3, 0x811d45772bc3e348, 0xdb93896d16fbd7d4, 0x1b2cbe92f52e009e],
            xy_d:      [0xb9a6c6bd88302c56, 0xeca02bcf37e3482f, 0x32337c7cc9014996, 0x3dbf660ced306b68],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x36d72528d3be7d44, 0xc1131b2a73d1c328, 0x04ddffe6c796c16d, 0x41df6e330dfae55d],
            y_minus_x: [0x3c611b9e34ae347d, 0x6e92973303214837, 0x4a8ea222257095e9, 0x611ad6bb00ba1cab],
            xy_d:      [0x312c658683c4baf1, 0x2494a12a48c4f94c, 0xd0655a11f171b772, 0x473e715866f83350],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xff537f6feca5b873, 0xf8986028e0fe5d16, 0xa4416a3f3f97d5c4, 0x70a92b09c576775a],
            y_minus_x: [0xe24a321d624642c8, 0x7e9b0efa1e309cd6, 0x04ed8bee9d74a6a4, 0x7337052ec7da33a5],
            xy_d:      [0x955dfb272438657d, 0xe6b2de785522c5b5, 0x4d5f275d3af44c2e, 0x7f85e4086a8a6f72],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x41d64ed6b9b909d0, 0xcffb7c5d177b974c, 0x988f176ea1f634ab, 0x0e9d483eef62d5ba],
            y_minus_x: [0xdc8035d2137a09ae, 0x46b39b4f2bf0181a, 0xe5e46feca7a31e14, 0x468fc6de7c776dfa],
            xy_d:      [0x5d0b49989f6840ee, 0x94994fd6c28d9a40, 0x8094009e018190e5, 0x00008da2518dfef1],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x0b2b0fb4b50553ae, 0xe0dfb92e2c295eb5, 0x08d46ebfcd3cb356, 0x31ecc45169428813],
            y_minus_x: [0x1fefd0361fe33606, 0xaea071c726eb06e9, 0xbd71c59c134726b8, 0x1d6246c8b741abf0],
            xy_d:      [0x800903a9d7de9197, 0xf495e75c7eec7b41, 0x7c0b34d9c27395c8, 0x19fd6a9591b45033],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xc6966468621167f4, 0x8395a7bd82d09d65, 0x51ff5b73767b52b7, 0x1e61aae65c8538f1],
            y_minus_x: [0xaa0324e362f20f0b, 0x057c3218199fbb9a, 0xd9567e697982f3a3, 0x0b607a14d12b6e53],
            xy_d:      [0x74db4a21c81f488f, 0x5c524a65bd2b1be7, 0x643e68d25d5d4922, 0x718f57a135d73ab4],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x23ecbadcd1b806f4, 0xb94062fdf17c02a9, 0xa9b2c79399722ef0, 0x218f963fb32fc05a],
            y_minus_x: [0x59f482086d337f46, 0xc2eea5a9360b72d3, 0xde1ecbb08f7cdfc1, 0x6accb2458f548cda],
            xy_d:      [0x6b0131a242c7bd83, 0x8a559a97d0f528a5, 0x4480220d104854eb, 0x7d8238afc8929d93],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xd9bb614062735d63, 0x4b8769eeb68ecd85, 0xd84d4aac2285fca2, 0x2468567d2be6f111],
            y_minus_x: [0x41f6de94567b5718, 0x431abe45beae3d5a, 0xe02023b4dbf59622, 0x6cd9bdfae17b2c1f],
            xy_d:      [0xdb0793723ed5f32f, 0x78e8d0cbb1179d1b, 0xa104673f74cb01ca, 0x4b11a0c899b69ded],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0x6ea4ce6b0ff9c320, 0x94e6cde1831b12d0, 0xa8f16c011eeb9ee1, 0x2512b83d101dc918],
            y_minus_x: [0xdcf24cef7b133ffb, 0xbbb9653dba160421, 0x11d00a9ff4d27958, 0x166feff66ae82803],
            xy_d:      [0x955bb34529fb76b5, 0x9821212c0ee8b850, 0x20000a261d7100b0, 0x2b90c4b6924724fe],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x142ea848d0e86d27, 0xa5d537d3daff1f04, 0xb1f28bbe70c9c9d9, 0x01e49ad7e258187e],
            y_minus_x: [0x05b72a8bfe8c0dd7, 0xc811314f95dcb1da, 0x2a84de7499032312, 0x2bc76eba7b1e09ed],
            xy_d:      [0x4cb93b6324958615, 0x23e661626ff102fe, 0x6e694dc26eb11d1e, 0x5f6155ac814463d1],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xd3909d04d71968dc, 0x8795c3efa07ae16a, 0x05d75263740f5594, 0x470dfb36356dd62f],
            y_minus_x: [0xd0d0693df26c3dd3, 0xd4c5a6f5b09c8d76, 0x4cd06ee839e5cdc1, 0x56eae12d1007e567],
            xy_d:      [0xf155eaf4bc96443f, 0x0d01000c65c936ae, 0xdfdd34e6dd572f8f, 0x3982a459ad7447af],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xc02d84a5d0eb719a, 0xdf9f78bb849a9f8c, 0xa11f836583113815, 0x2c2d113bec3c22ee],
            y_minus_x: [0x621aa8d1e5d45c77, 0x32d1378ed908af8b, 0x3b07a7a955c61c28, 0x1821a21da08edc65],
            xy_d:      [0xd0c52fc119ea44b1, 0xb34c625af63c12bf, 0xd3c737d29b9f20ff, 0x3b2b13c4a877cc0f],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x70b839d1f54367c5, 0x1d467ddb838aafee, 0x2429f3fe18c1c547, 0x545dfa425b09fb0b],
            y_minus_x: [0x1c61e7acea8fe460, 0xcdf6e97e82835b79, 0x135f884fd5ab8747, 0x1fa0b05460dc2353],
            xy_d:      [0x793097ae3789b63e, 0xd7f56883fb6e88df, 0xa93f4d6909ef3799, 0x0f3ce59ac0c47bae],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xbbf4a9ec7af040b7, 0xc252862214ceef6c, 0x6e361686432292f2, 0x63c55a969ce8f97a],
            y_minus_x: [0x009a1b61f77bf1ef, 0x4145b53fff4f087c, 0xbffc8472de7cef7e, 0x72ebca8d9d1d9c18],
            xy_d:      [0xb3535269c92968a3, 0xf2eef0de438d6403, 0x5c1635a05360e4b7, 0x4b6c3d208d10910a],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x7dd26af16aa702b8, 0xf10fd7eb975eccfd, 0x24bd6139b774bbc7, 0x4fcc85abbd2d36ef],
            y_minus_x: [0xd9debf2d21033101, 0xc3cdf1e6862d1260, 0x2be02ed8eb7cca5b, 0x547c3e40b2f9c653],
            xy_d:      [0xd19a27568df47beb, 0x3e8f2875d6753cc7, 0x3be32b4f2906f029, 0x22c417f0a9a6b69f],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x6c564c94ca1e37f2, 0xdafcf8b0d1c1c951, 0x134ced89df644d79, 0x3ee7c21e7202f83a],
            y_minus_x: [0x33349a2ebabcc1eb, 0xb15b76888bd508d3, 0xbeee8c2bcc2f0947, 0x3447f2dc7b137b6e],
            xy_d:      [0xb6486b2425239960, 0xea90a1fee52b194c, 0xd9df1461c8aee370, 0x339cb43f39938c8d],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0x5336e64ee4060d60, 0x4bd02e7a0d9c521b, 0xd3f5f9df4aedebe3, 0x3ed05c7b46bf3ed5],
            y_minus_x: [0x77bc100a1c2b3ad3, 0xd1324f98557ed4f4, 0xa668f5a82e6fd465, 0x2308ad5d0ea6e059],
            xy_d:      [0xea078ca9e1daed3b, 0x0ed637b99088cf4d, 0x81e63010ff592cb0, 0x2d2fc43f41b3a5a5],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x4f4b1469d05321d3, 0x5ae1e58073619032, 0x4da98144be16f619, 0x61f1bd716ae8e386],
            y_minus_x: [0x47b180e7b8509e7f, 0x67e75c0a9a86e862, 0x7b814bea525e523f, 0x5b34db2b72268a1a],
            xy_d:      [0x1c3f1f8376d37090, 0xb3980ea8ccd09d60, 0x5ead6c7c1b131c08, 0x7510f366a7eaf4df],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xf7a09489334cd968, 0xb8e98423b8468980, 0x192a196808c1585e, 0x629b8d83800f459b],
            y_minus_x: [0x78e30b8518237326, 0xac38951500691a92, 0xb4edde9e46415baa, 0x6c35fcf8d0caffab],
            xy_d:      [0xd36d8446af7c3c7c, 0x293c786e30849bf2, 0xd601a4e930d0b75c, 0x4757d81bc87290bc],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x28a0402f07bad705, 0xf6017df193316618, 0x9675ef8f75491cb6, 0x625719a262a1add9],
            y_minus_x: [0xcb02aae09ba4020e, 0x10cd20f34105d508, 0x8e40fb9c39a43686, 0x584d6633ad016330],
            xy_d:      [0x4e7944dcddd2a1f7, 0x79bb074ead64b8a1, 0x8ec172e327c9b055, 0x316a910dbfca33c7],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xbac2ea131d7bbd1e, 0xefd73d88ff748a26, 0xd28338402cfb8c9e, 0x0a794d29c1c9101b],
            y_minus_x: [0x292614ce0c6849ad, 0xe435dab645060d06, 0x51ba82976da54318, 0x6e077ef25e3aa2b1],
            xy_d:      [0x6fb8bf6e12d96bf1, 0x10fcb86dccda9820, 0x6d491a5be1f6a631, 0x6f391b2e3df7049f],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x3ec99c831784599f, 0xadcb2cf2efcf995f, 0xd67f9ed68fcf5efe, 0x385902aae5b9a4db],
            y_minus_x: [0xabadfe03a2b890b6, 0x9bbcb3ae834a6cad, 0x4d051bddfa0c8f19, 0x7bf8882623da755e],
            xy_d:      [0xdf2889e2aa889626, 0xb344211d4d440fe6, 0x22333bc2af281da3, 0x071a1cc7a5032025],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x0c4985849f258c94, 0xbef1f08739f9fb20, 0x7a190bed399caeb7, 0x37c56f6b651bce1f],
            y_minus_x: [0xdb3e916c9f675ef4, 0x84d9f42093c11783, 0x3a1fd30fd82db6c6, 0x2f2a029b451b11b9],
            xy_d:      [0xf1a0091efedbd94d, 0x243dcbf0d10d5948, 0xfccb3e817ef34a4f, 0x3c06f3976469ef4b],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x338ff579807a13b9, 0x47b97595154620d5, 0x14d0bfebcb9b9949, 0x0ef7e356995ac3d3],
            y_minus_x: [0x057142a2844d73de, 0x1c46ef678e3fa683, 0x1c560aa8852408dc, 0x075945fb38c94672],
            xy_d:      [0xd7addf0d77a8caca, 0x0a46093bc8bd8af6, 0x94c8fbfdbd72ed17, 0x633e900dfc6e9433],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0xde0f7a5eab3d73cb, 0x1fb126596b224c5e, 0xf2083269160fa764, 0x577ce2d2dd1c2000],
            y_minus_x: [0x4aff48cd3a77a7cd, 0x9d413df67b518451, 0xcb2700e984d23d80, 0x78e21e27add1e3cb],
            xy_d:      [0x5b7eb6fb7d4f3a5d, 0x78c13c5e7257933d, 0xc12ad9e878f7cc87, 0x6d3ac651c862f949],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x467048c58eb0ee4a, 0xc6f69b234d409833, 0xea735414d7f45569, 0x0539c013fb1cea1f],
            y_minus_x: [0xd15b93886ca31241, 0x1d5463696abea801, 0x71ea005fd05a43e5, 0x56dd712259f5b976],
            xy_d:      [0xcc07a517abfff0e6, 0x80338686f0c1cc21, 0x082e1fa524fd8afe, 0x134c6531a893534e],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x171eb817af1eec87, 0x4f1f848c726929c3, 0x2f3b9f7b0126d4b5, 0x1e002586257d1999],
            y_minus_x: [0xf3b298c419585d3c, 0x1c0c18fbc92e7fc5, 0x84540dc8d0148fe6, 0x0fda1ee624e57583],
            xy_d:      [0xcd54a356037a5c0c, 0x8e514252d4036279, 0x9f69932fe366a3c3, 0x75a1fe80e68fe90b],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x5ae3a12c1f3b0770, 0xbaee295cf7055cc8, 0x5f8a13e10395c91f, 0x79a10596b7f86cf8],
            y_minus_x: [0xe3d3aea5a34be2a2, 0x0afefc246f87ffdf, 0x14345cf5d5233c2d, 0x2d346b882da97b8a],
            xy_d:      [0x57967b65cf428f03, 0xc7ac9c89e3111c62, 0x6d455c4b4cfdf9b9, 0x1edab197f51a5e4f],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x9724c858c14c12e1, 0x76f575c39f4d44c8, 0x77781e9ca638257c, 0x6c8cbf524aef9587],
            y_minus_x: [0xfa377715fbaeecec, 0x868bd8fb1cb3acd2, 0x8df96898a4cf3939, 0x02190d6fa4ebaf89],
            xy_d:      [0x8270b00cf272ad57, 0x73bda1bd3f17c974, 0x63e716e0b78acd52, 0x22f57ee0fa6b8660],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xdb07231267e658ed, 0xacede1495eae01ca, 0x18d04e8eee0240e4, 0x5fb9e7752eab6ca0],
            y_minus_x: [0xb4c200c2c022eb8c, 0x26117d5167978328, 0x4a0d1b32b59116e3, 0x6d2f75e401b16d6f],
            xy_d:      [0xdbd3dfe8852746e3, 0x5f2b803f2264d99c, 0xb060903f8aabd77d, 0x1302c44893310c6d],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xa640c71e633b72a1, 0x2f21164981e76656, 0x7603e6655a094f84, 0x06f6fd08592221dc],
            y_minus_x: [0x2cfb825341b07f82, 0xe1ec9fef3b30f37a, 0xc18d953989439aa8, 0x2a5686172730aeab],
            xy_d:      [0xf71db3eadc15a915, 0x9b78b1a34fd2e0f5, 0x52da69793760cfe9, 0x3176595d53bd4a04],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xc903941b57db143a, 0x2fe6af42bcf08252, 0x2d5680d6e31850a5, 0x30c89ea83ab31fcc],
            y_minus_x: [0xf2f6bca9308a9595, 0xa4b11abe876eebe8, 0x3a4164685cb5a638, 0x572cfc8cd4b36c5f],
            xy_d:      [0x06e3169b0d1918ed, 0x7d23ac194a100138, 0x016c00a89fcaca67, 0x1eede15098e02eae],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0xf9d52bd113cb5d8a, 0x441d5d5bcd83ed10, 0xf2a5f10c18d01c8e, 0x2f73fd9c6c1902fc],
            y_minus_x: [0xcd6e07fce72f629c, 0x81ce1535c6178986, 0x814003e3f87c4a8a, 0x7c4b418a560259b5],
            xy_d:      [0xa9c6fee5a0a23547, 0x52d67ed4a1a49bfc, 0xa357c846931e463c, 0x30e8319e4de50684],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x56d1945e7c7e39e6, 0xf74234aed3781bfe, 0x31bfda6d9c615484, 0x6d91d616fc033dee],
            y_minus_x: [0xb1ba249affed92b3, 0xe2deb5c4bc05b45d, 0xb78d99402a9f7601, 0x374b2fec23d76bfa],
            xy_d:      [0xcd695ca9f7402934, 0xf4478cd57d6f36c6, 0x07388b820a874167, 0x7cdcdddceecaef6e],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x68ccbed7474fb9ba, 0x5019517c67dd840b, 0x66b65d0936a22f85, 0x0dd408a305665c1a],
            y_minus_x: [0xf5d9aaa035189361, 0x6931c1d4346461c9, 0xb6063214f2dcbd41, 0x2832f8ac64fe90a3],
            xy_d:      [0xb840b4fd86214caa, 0x70a300566bb767b3, 0x17555cc5387322dd, 0x1cc0f9cf2c527d79],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x6422efd2b6f337ef, 0x70a952801620241d, 0xf4e970b1e3da7b19, 0x187a22976e5e0db2],
            y_minus_x: [0x8c7dc53aac918540, 0x8e8b47b4b0737a2e, 0x9d42d4a28a549e5a, 0x5c6e041b82d6687e],
            xy_d:      [0x42b693c162bacba0, 0xfd09a2b4fcce5f66, 0xc4227e39e0752738, 0x3196cd0d2c9f9234],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x5f84fe88f686424a, 0xb1f838c086cfb49d, 0x10c84616abe7c3bc, 0x5d2d3ef9457b25d1],
            y_minus_x: [0xfb5db58adc03e5d3, 0x8c11e3efde2a786b, 0xdd8ecb81b714b385, 0x05927a4423f6a52b],
            xy_d:      [0x6e6d6a5f288df55a, 0xd229c03af6936679, 0xf0ce7fcf802fcd32, 0x5a7e7ba23aa40fb1],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x52dd8ed5bc67d54c, 0x2e76d1338c85b979, 0x4984e48885493047, 0x008cd18217d9ba58],
            y_minus_x: [0xe0cbf0263c4bb3e5, 0x5c38a6e59c6ca33e, 0xaaef444141fcafd4, 0x1e9dee0b26fd31fb],
            xy_d:      [0xb3d16c4e74610bb5, 0x334ed2fb344ae860, 0xfab2cc72d9415158, 0x6b604478f6f10539],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xac0dafd61279c781, 0x5485f4ff5d71865e, 0xcd10b4814567c978, 0x01c5bf5241ac81c7],
            y_minus_x: [0x19b69e8888543702, 0x6bf9c41905bad97d, 0xfc8a99bb128394c4, 0x44b3a635cc8845c3],
            xy_d:      [0xcfa77c10cc98b7fc, 0x17a4e9417553c6a7, 0x84b8d2d5ad7798ba, 0x372f18812cb4f5b2],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x99827d8731833111, 0xfd9a8344c3d65d1f, 0x5e8c923bc60830d1, 0x182c56a1e8c1c310],
            y_minus_x: [0xd8b6317ac3f2c9f4, 0xa4ccf6ef652e9f38, 0x5a48e0f00a661f36, 0x447a88a3c4d46dd4],
            xy_d:      [0x191e07fef2bb31e8, 0x02e1ef9c51175308, 0xdee3c55ed64ca7cd, 0x132a4fd277f1ee4c],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0xeda342a4d79fb337, 0xebbfe78278a50752, 0x9ef91ffbd25d0623, 0x1d086ff099671e42],
            y_minus_x: [0xba0ead230f35fceb, 0x9182d9fe3bbbd2c0, 0xea2aba51323a69ec, 0x0c9370ee3200f07f],
            xy_d:      [0xf03fa745750be750, 0x97ea8aa31d0fe0fe, 0x8ba9917e98f96078, 0x0fd0e80ec30f2e8a],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x9c6e560068efca4c, 0x173895eee88406f4, 0xbf89f49f7eeaf131, 0x79fe768c774d00f2],
            y_minus_x: [0x66402aca3eaccc19, 0x0f232b6d1bf8aa90, 0xccfb7bba2702c990, 0x3b9ab1de353ae799],
            xy_d:      [0x8358f4843189ce50, 0x5249ed33e2d01f66, 0x46bbe76456b1c499, 0x4fa135b80dc327a2],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x78bf1ae448d092a9, 0x5bb5c0a9abaf4e3b, 0x7d41a03786cdb91f, 0x05bb5d8d9fd3f21c],
            y_minus_x: [0xf7e4932620c88df7, 0xf8d1dbdc0bd11612, 0x2c3aed35f9878a23, 0x670d7a938e98d848],
            xy_d:      [0x045c60fcbfc949c4, 0xdf33b8e5ea2255b7, 0x9172b231ccddc00b, 0x7db6eb0f5bb954aa],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x2b9855fcd580e95a, 0x8b7dbb6e200a1d8c, 0x43365f32d065d940, 0x69fd4db2cdffb57f],
            y_minus_x: [0xdbd6e0f428799ec9, 0xbccc7d27b0466ae7, 0xd6cb16dec6fe2ded, 0x381f4de7578e97a7],
            xy_d:      [0xb60a6474ca442a21, 0xc21d2eb332d76a72, 0x0c0ddb9f5e6b2d78, 0x5cc6c9f2e2630fa8],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xe1c3be306973f1f9, 0x1d9a5550184145d8, 0x941f1373b9cf789c, 0x34ce4e48016182bb],
            y_minus_x: [0x8e25e8b399f12470, 0x5ecf09438adf852f, 0xea1fc678508581bb, 0x69d84daeef8c8d89],
            xy_d:      [0xf9835391aca378e6, 0xc90b8c5ae672ecbe, 0x9466e923c0da74ba, 0x28e5798637e6ec83],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xb9bd7ccd0c562a5a, 0xc819bc6e628e5987, 0x15c4de19a6708663, 0x495714e0c4fc74cd],
            y_minus_x: [0xd305d3a13b3a7005, 0x318742b850bd3df9, 0x1bac2b1ee7999266, 0x2a82551491c1fed5],
            xy_d:      [0x54cf60658f8680de, 0x06e8f7e61d1a7bd7, 0x2ae53a90e84e2711, 0x6fe8a7f4ac75d2f5],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x9e217f2f5fc9e5c7, 0x5f6fd4289b6a2b2f, 0x707842cf44211074, 0x3eeb9fcb0392e894],
            y_minus_x: [0xdaee16ef9422d596, 0x034a48d8853ff4c9, 0xa6d579eb200171a3, 0x049ff9372c323a68],
            xy_d:      [0xd886927f3402cc0b, 0xbab983396dd791f2, 0x09b3929d5a2bd614, 0x57acde5e435a3852],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x3820eab05b48e177, 0xc2900d9fd6ebf38f, 0x8b6170b18899aac2, 0x5552af1e80841458],
            y_minus_x: [0xc1c23ea14c8b89a6, 0xd68dc88fab3e81eb, 0x3f3ba46cdf3bd568, 0x6a2c5a171728d7a5],
            xy_d:      [0x76a8c9730603a21e, 0x2162a716ba210e88, 0x1a95a6417edae432, 0x49f48025453b4332],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0xdd9700648c9dc3b6, 0xf671d448706e2835, 0x7679dbe01b6f324f, 0x6fa302044c6f4f0d],
            y_minus_x: [0xb9cec422c197e764, 0xfd1c6b64d735fc31, 0x195e06e55ba7ff7b, 0x79c9bf440a5e722f],
            xy_d:      [0x5c81b88b14bdfa3d, 0x54e89d916a78341a, 0xf0cb8aaba34b5ee3, 0x567c527448eaf41a],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x965aa43f0be835d1, 0x12691c0e1ca80cb5, 0x6bb2ce40c2cbc518, 0x3d37bf9448eb527b],
            y_minus_x: [0xb6c9fec3838887aa, 0x6ea604e9be1c5aa4, 0xbe58b5266139b543, 0x5024deb72c129504],
            xy_d:      [0xbe84fec6b54d779b, 0x7877305f2d9edc85, 0xa610da9628cf5fea, 0x7008d56fe2a2ca0e],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x31ef68640165fc48, 0xfde84c6506ffb555, 0x3126857edcdb76cc, 0x34e70c5bbc9a058f],
            y_minus_x: [0xafb3c936e7cafc1e, 0xbe3f42b0b8944838, 0x6b50f3f9ccc7bd2d, 0x37e2e60d85b17cf0],
            xy_d:      [0x68f7aa94594c3cdc, 0x6e8d571e6a3f4849, 0x893f02210c4f91a9, 0x4aacb59d72b880f8],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x84ff988b3f289265, 0x85f20ac5ece3a2ef, 0x1495be913f7aab72, 0x1d527120d7db689c],
            y_minus_x: [0xa3139ce91fc8bcd1, 0x7fc18918cbeb6ee7, 0x0983ef5aa9f90a45, 0x06911bb43dafa6ed],
            xy_d:      [0x96609c5f951982f1, 0xa42c1fc7d1749361, 0x041d58d12aa4e975, 0x597e55372343d1b6],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x1903d23993c3e666, 0x0bf18c847909f1fc, 0xead9766bfb06cb27, 0x7a37b19b613005f4],
            y_minus_x: [0x3de2b746e2becd71, 0x9f05e976cef85ef9, 0x55600a6f1177f251, 0x6313f4e77f5eb52e],
            xy_d:      [0x9fa579a2d5b64b8e, 0xf14475b94ca1b98f, 0x99acb54501a20c36, 0x3da48b803f6b3149],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xaa1a0d946ea9d165, 0x550bc82defa17e1f, 0x87fac96ca6e97c7a, 0x4e81b107f04669be],
            y_minus_x: [0x16c2fdae55c25832, 0x24bc086944f9de0a, 0xa3b56e223d8ae706, 0x0915d1bb7c227ebd],
            xy_d:      [0xe1011966d15a72aa, 0xcf687ea108ae8c3f, 0x1755da5f3eea3cec, 0x016385fa95b47626],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xd672995fa2c6b967, 0xadf3b4703e5b9e5a, 0xab67beca7745def3, 0x75834bf1ff5a1d01],
            y_minus_x: [0x5143f625ae8597d4, 0x20ae2bc803a44165, 0x7022530f60e840ae, 0x5319a785204f7af0],
            xy_d:      [0xdb6478256fb151e0, 0x9f78007783b6d22e, 0x4e4e5cac24f86954, 0x0e61bfa1a20d97d7],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x6bb32b78e4e75753, 0x0e2d8afc0c72b2b5, 0x137394194226119a, 0x5d1a37bb978cb41c],
            y_minus_x: [0x2847ab2d2e63991e, 0xe830e26072835491, 0x7d8c55edae22d60c, 0x763404e081c018a5],
            xy_d:      [0xe96aa889716d3564, 0x74de8198d8f428f6, 0x4b03a36ec7633931, 0x02c88dcfb77be2e8],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0xa9a4d679a897756e, 0x9060a0e98e60e5a4, 0x920c0603d4cd3446, 0x6aaf7ce8e325968b],
            y_minus_x: [0x6099ccc1faef8754, 0xe079bac7a8962656, 0x1678898505d9cc70, 0x759e767cd5138631],
            xy_d:      [0x1b53b85d1db9de84, 0x3125778451d7df86, 0xab9bffcc5a04a379, 0x33afa6f099c0ba4e],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x5097fb6c9ded5985, 0x8392ec07ceb296ff, 0x80ce27f9cd5f4a43, 0x707a285c41669e21],
            y_minus_x: [0x07162901b58bc17e, 0x3240b640b656c1da, 0x686e5eecb4b2039f, 0x09eccefb80b26290],
            xy_d:      [0x00a5af6190f2e065, 0x27e5b4e4eb8cdfd1, 0x272f8e0c3a8011d0, 0x0e036f4f2af6d640],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xffea95a07fb6b4d5, 0x9a29858c6e2024dd, 0xaf252e17d1a6cc4b, 0x3c04b7c73e995d16],
            y_minus_x: [0x4c87bd6b519f6271, 0xb3047c9c5f177047, 0xce50a1e2b194228a, 0x2679c50ff616db06],
            xy_d:      [0x5055553286fd2e6a, 0xfce24f15245aa3c6, 0x2784e63eb801b92d, 0x5b9e569d13048d5f],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xf8df547dc4eeddcd, 0x9de5965e30d75765, 0x47ac53dd8fcdc6ce, 0x50aa3f6d28895343],
            y_minus_x: [0x594a31a6c164fabe, 0x0fe5fef09249a29b, 0x4f4e26d9a0c66dad, 0x002079eca2a20cfe],
            xy_d:      [0x6f7ef49cfeacc360, 0xfa139644a8851c06, 0x5b95d203dd988cdc, 0x71aa8519a512a6fa],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x4ddd2c22b92a3d9b, 0xf982e37d71620470, 0x30747d34e39a78c6, 0x5cd495d7d53ebb3d],
            y_minus_x: [0xb283eb76dab4e792, 0x8bc214d806529770, 0xf53e004875b5eb2e, 0x5f753163ed7bc7a8],
            xy_d:      [0xce926389f34993a7, 0x2fb1c2bbb46de9ba, 0xb8292ab075c559cd, 0x3421b50332e4e266],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x8f2b698bf410083e, 0x62933422420574b2, 0x60f050e31907fe3d, 0x29b9b34e48b08a39],
            y_minus_x: [0x5e011af410179f8a, 0x63ae0071327cbad8, 0xc8d274ead1c6120b, 0x4bdb73fb455bc4fc],
            xy_d:      [0x2e940a55cd072922, 0x4847904264e559fe, 0xd7e57ac42d968f65, 0x4e5a5ad33c7c3e88],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xb5ba5531515003ea, 0xf988f0587838e3d8, 0x2b83f21c0005f111, 0x56e07e96c177b756],
            y_minus_x: [0xdb3260359ca57e36, 0x06446f124c6d2fd8, 0x27c6818b25e56c1a, 0x1985e53c6f3a1a51],
            xy_d:      [0x4c177fc2088cba27, 0xfcb4af4b1583a392, 0xe2c560a7dfe4a9fd, 0x1e18df0d9b4f8e7a],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x60b45e49fce5a139, 0x575c388fe3e76dcc, 0xbf8729551a5646bd, 0x20e76084bf3eaadd],
            y_minus_x: [0xd87a4326844a4577, 0x03ee0cf748dd0e37, 0xbcbae6d7535650ac, 0x1985b089a1316a5d],
            xy_d:      [0xfbcb0cebd136c045, 0xdd8fea4f0ecf0ab6, 0xb9ebe1b66dd0ef93, 0x135a266c8f943bbe],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0x70dbf949b13981b8, 0x25a93cfff5e54516, 0xed7e3bc55fea098a, 0x7ef5880a4e393087],
            y_minus_x: [0x28f82423c79c3a31, 0xd92ede7a4e5f659e, 0x4d5589226ccf902a, 0x56384f360e0852eb],
            xy_d:      [0x65b157b543b3773d, 0xb365f6022aa9e687, 0x2c40009c0785f25a, 0x0473474ffb167175],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x979684ea855c7973, 0xd65c90c6e2ac91ef, 0xa5479a1339bb365c, 0x66589deb9c7b8cfa],
            y_minus_x: [0x1a56a80525e0984d, 0x469c6da49e85ea4e, 0xd12e1ecc280544df, 0x578f9fc3f75d1d84],
            xy_d:      [0x7bc2463af28adb25, 0x52ca80dd6da5481c, 0x6106989f9fba8da8, 0x0cd0f1a9e0571774],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x5a10b966eacb5ed5, 0xc9f022a1cc777e20, 0x4fd8a9a3da2084da, 0x79b5e9cc8133571a],
            y_minus_x: [0xbe8e3ab05d7d02d8, 0xd9f0d0506372af30, 0x71a94b8c606b3239, 0x60aa3588e1061a43],
            xy_d:      [0xc2a996a8499a59da, 0xa37e88a5b040b2b9, 0x662faf98212e41ba, 0x20914ad15c3fd5ae],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x9732a930f149f563, 0xc22d49019099d66d, 0x2304bae5bc804cb5, 0x03b05dc68cad6ec0],
            y_minus_x: [0x8ce4cdc47abf6b6b, 0xa9c9e59336fc6412, 0x2e771909d9856939, 0x4a70a9f5da96971a],
            xy_d:      [0x209f0d0be6f340c5, 0xab8ab6d4f6b4d042, 0x165f9347a3656658, 0x359a5f4de19d62f9],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x08fe34b2b2b8f960, 0xe364f422a98739bd, 0xf19d73d16a7f281a, 0x40dce3db1736e985],
            y_minus_x: [0x79ef97b21d3c6059, 0xa61f4b8f7917013e, 0xf63e8e2f24e0dad1, 0x100960c784916e96],
            xy_d:      [0xc405aaf2ad644e8b, 0x8a41920fa2d053b1, 0x1e9b77efe173b60f, 0x4457adbc2725d6f4],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xf1398a6944e6161c, 0x25f25e88d1438bc6, 0x0c6a946b7d19b267, 0x7211e0ead7ecc137],
            y_minus_x: [0x141a4cee440f9290, 0x4e8292ed3bc991db, 0xc4bd6efdb39a20fa, 0x595bceb88b1d0b46],
            xy_d:      [0xe642fc6cf6fe59b5, 0x915e61479ba372fc, 0x724ef19c7cf2e9e6, 0x24052f7de09f16e6],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x5b30a67221671106, 0xb70ccee626029c94, 0x331fda526e0e5f01, 0x52598ea3b48e4703],
            y_minus_x: [0x85a8f38580b1102f, 0x835a82e7c58ed7e2, 0x9635d830f7ad55e6, 0x63d513b0065bdf98],
            xy_d:      [0x152a0f76e00afc58, 0x08d27f3f3e349fbe, 0x7857b309a7513c6b, 0x6a2dac2e8a6ed04a],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xb102726871d990e7, 0x1dd531bd147f8f4a, 0x858667feadccdecf, 0x66916e1f32646838],
            y_minus_x: [0x33df93af506a1cfe, 0x56f3471a044df75f, 0x214489a66a3cf397, 0x47b17ce1995d2a2a],
            xy_d:      [0xfe5a32c4eb1daf93, 0xae57351fabe5e7b0, 0x7f5d61694a9d7d02, 0x4e07d00d1b1b8a1b],
        },
    ]),
    LookupTable([
        CompressedDuifPoint {
            y_plus_x:  [0x348415874649b528, 0x7ce4d01ae0ed62db, 0x37db9f2a626fdb1a, 0x2002a0cd8e95e0a0],
            y_minus_x: [0x6963025b114a1ef6, 0x5e465f672267d9d0, 0xae92a7f9cbc0433c, 0x47d1b0a79d8e535f],
            xy_d:      [0x5001ff5edcdf4178, 0x1044e0d79d225648, 0x7c24cfc88caa7d47, 0x0fdd10c577a055a1],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xa79f2b821f3d80ca, 0xd40e9f77046d57bf, 0xe41ce355ccee6f78, 0x3629ae89ffbbb0ea],
            y_minus_x: [0xd5aa4a247d647a9f, 0xc0fb744d3dd31ba0, 0x3a7eb63eb615af00, 0x1c971d6554643721],
            xy_d:      [0x265e9a749f451ace, 0x9703c0a22c43f40b, 0x8c98ce3b794d5855, 0x52f0bff26a85609d],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xc8afbffabb7890ca, 0x61a5191397e6c3f1, 0xe65d17ef268df293, 0x75dd4147c4b4c4cd],
            y_minus_x: [0x85144deb8f027b3b, 0x90470e296b2107ca, 0xa8c36c581a348fd5, 0x12aba8a2154fd9a8],
            xy_d:      [0xf168de33487f1c77, 0x265aa50c504cbd6a, 0x4b8eb48a57c2306a, 0x6acea827bfb5bdf2],
        },
        CompressedDuifPoint {
            y_plus_x:  [0xce2448f3fb693375, 0x83a250cd8183bc0d, 0x441c478eb030f11d, 0x491f53519aa5ea87],
            y_minus_x: [0x53b9c1bc59f5aa61, 0x0eb4e9b352aa9e3e, 0x851367b17c94005d, 0x40d5896ac03f190b],
            xy_d:      [0x08c68c4820f196cb, 0xdcf6f1e16c18ac24, 0x0f55a138ec1922ec, 0x251cb0f1648c50aa],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x0193eb2279919f8f, 0xa4cd13071a7e780b, 0xc1dad38b796d5cbc, 0x34567756cdea088f],
            y_minus_x: [0x38ee1df07c735dd0, 0x6b677c1a3f7ff185, 0xd4c9212ff09d23b5, 0x166b5e71fd8edbb1],
            xy_d:      [0x1c5a648779ebe108, 0x984737125bd68206, 0x9c306cf8dbf39f11, 0x2cabb06ada847acb],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x441565f5fe8113c8, 0x44d79982e208abb0, 0xb2fa4971be9a39fa, 0x165962efaa28ad15],
            y_minus_x: [0xb094dff0825531c2, 0x47cb00045253fe65, 0x9fc5e044bec84a2c, 0x784fd21f6e5948d4],
            xy_d:      [0xf5852ec631fe9565, 0x6915e0b31734a77f, 0x9391f9b77c65d81d, 0x387814f67864098f],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x953557d52f085853, 0xbc7851b877820d54, 0xbb9f7dbbd51d6b0f, 0x627652d153a5ecf0],
            y_minus_x: [0xa30983d997769f10, 0x57021799d22ac0f3, 0x64a224e98caf81b3, 0x45beaec53618a42c],
            xy_d:      [0x92ea24193dcaea98, 0xb869c180519a078e, 0x6f0e298e3070e295, 0x53911228963ef4f2],
        },
        CompressedDuifPoint {
            y_plus_x:  [0x5fbdddc52154bafe, 0x462e1cbbcb56d1ac, 0x713fe3b7e6f6d524, 0x0cb9afebfb5e1053],
            y_minus_x: [0x0d5e4957a4e29a17, 0xfff76c08d9737d68, 0xf7d14646fe642714, 0x08daef8c522662a1],
            xy_d:      [0x71d5c86821642133, 0xf5c24707bf8caa3f, 0x9281d0e832d24bdc, 0x07f7c888c8efc4af],
        },
    ]),
]);
