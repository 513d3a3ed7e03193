//! Integration tests for CodeWarrior symbol demangling.
//!
//! Decodes symbols taken from real game symbol maps and checks the rendered declarations, plus
//! the failure modes a symbol map validation sweep relies on.

use symscope::{
    demangle::{demangle_or_original, is_mangled, parse_symbol},
    demangle,
    symbols::{map_name, search_symbols, validate_symbols, SymbolEntry},
    Error,
};

/// Known symbol / declaration pairs.
const KNOWN_SYMBOLS: &[(&str, &str)] = &[
    (
        "__ct__Q214NrvTakeOutStar18TakeOutStarNrvAnimFv",
        "NrvTakeOutStar::TakeOutStarNrvAnim::TakeOutStarNrvAnim(void)",
    ),
    (
        "__dt__18MorphItemNeoTeresaFv",
        "MorphItemNeoTeresa::~MorphItemNeoTeresa(void)",
    ),
    (
        "execute__Q214NrvDemoStarter18DemoStarterNrvTermCFP5Spine",
        "NrvDemoStarter::DemoStarterNrvTerm::execute(Spine*) const",
    ),
    ("ARCOpen", "ARCOpen"),
    (
        "setAllAnimFrameAtEnd__2MRFPC9LiveActorPCc",
        "MR::setAllAnimFrameAtEnd(const LiveActor*, const char*)",
    ),
    (
        "makeMtxRotate__2MRFPA4_ffff",
        "MR::makeMtxRotate(float[4]*, float, float, float)",
    ),
    (
        "clone__Q22MR63FunctorV0M<P18SimpleBreakableObj,M18SimpleBreakableObjFPCvPv_v>CFP7JKRHeap",
        "MR::FunctorV0M<SimpleBreakableObj*, void (SimpleBreakableObj::*)(const void*, void*)>::clone(JKRHeap*) const",
    ),
    (
        "__ct__20NPCParameterRange<f>FPCcPfff",
        "NPCParameterRange<float>::NPCParameterRange(const char*, float*, float, float)",
    ),
    (
        "JPASetLineWidth__FP18JPAEmitterWorkData",
        "JPASetLineWidth(JPAEmitterWorkData*)",
    ),
    (
        "findElement<l>__8JMapInfoCFPCcli_12JMapInfoIter",
        "JMapInfoIter JMapInfo::findElement<long>(const char*, long, int) const",
    ),
    (
        "end__Q27JGadget27TLinkList<10JUTConsole,-24>Fv",
        "JGadget::TLinkList<JUTConsole, -24>::end(void)",
    ),
    (
        "__ct<i>__Q29JGeometry8TVec3<f>Fiii_Pv",
        "void* JGeometry::TVec3<float>::TVec3<int>(int, int, int)",
    ),
    ("__vt__11TalkBalloon", "TalkBalloon::VTable"),
    (
        "__vt__Q219NrvTalkBalloonEvent24TalkBalloonEventNrvClose",
        "NrvTalkBalloonEvent::TalkBalloonEventNrvClose::VTable",
    ),
    ("sCameraTable__12CameraHolder", "CameraHolder::sCameraTable"),
];

#[test]
fn test_known_symbols() {
    for (symbol, expected) in KNOWN_SYMBOLS {
        match demangle(symbol) {
            Ok(actual) => assert_eq!(&actual, expected, "symbol: {symbol}"),
            Err(e) => panic!("failed to demangle {symbol}: {e}"),
        }
    }
}

#[test]
fn test_plain_symbols_pass_through() {
    for symbol in ["ARCOpen", "memcpy", "__start", "_", "", "a_b_c", "__"] {
        assert!(!is_mangled(symbol), "{symbol}");
        assert_eq!(demangle(symbol).unwrap(), symbol);
    }
}

#[test]
fn test_unknown_lead_character() {
    let err = demangle("foo__3BarFz").unwrap_err();
    let Error::MalformedSymbol {
        remaining, offset, ..
    } = &err;
    assert_eq!(remaining, "z");
    assert_eq!(*offset, 10);

    assert!(demangle("foo__Z").is_err());
}

#[test]
fn test_truncated_symbols() {
    for symbol in [
        "foo__3Ba",
        "foo__Q23Bar",
        "foo__FPA4",
        "foo__FPA4_",
        "foo__Fi_",
        "foo__M3Bar",
        "foo__FM3BarC",
    ] {
        assert!(demangle(symbol).is_err(), "{symbol} should not decode");
    }
}

#[test]
fn test_parse_symbol_structure() {
    let declaration = parse_symbol("findElement<l>__8JMapInfoCFPCcli_12JMapInfoIter")
        .unwrap()
        .unwrap();

    assert_eq!(declaration.return_type.as_deref(), Some("JMapInfoIter"));
    assert_eq!(declaration.namespace.as_deref(), Some("JMapInfo"));
    assert_eq!(declaration.name, "findElement<long>");
    assert_eq!(
        declaration.arguments,
        Some(vec![
            "const char*".to_string(),
            "long".to_string(),
            "int".to_string()
        ])
    );
    assert!(declaration.is_const);
    assert!(declaration.is_function());

    assert!(parse_symbol("ARCOpen").unwrap().is_none());
}

#[test]
fn test_data_symbol_has_no_argument_list() {
    let declaration = parse_symbol("sCameraTable__12CameraHolder")
        .unwrap()
        .unwrap();
    assert!(!declaration.is_function());
    assert_eq!(declaration.to_string(), "CameraHolder::sCameraTable");
}

#[test]
fn test_demangle_or_original_falls_back() {
    assert_eq!(demangle_or_original("foo__3BarFz"), "foo__3BarFz");
    assert_eq!(
        demangle_or_original("__dt__18MorphItemNeoTeresaFv"),
        "MorphItemNeoTeresa::~MorphItemNeoTeresa(void)"
    );
}

#[test]
fn test_symbol_map_sweep() {
    let entries: Vec<SymbolEntry> = KNOWN_SYMBOLS
        .iter()
        .enumerate()
        .map(|(i, (symbol, _))| SymbolEntry::new(0x8000_0000 + (i as u32) * 0x10, *symbol))
        .chain([
            SymbolEntry::new(0x8010_0000, "bad__3BarFz"),
            SymbolEntry::new(0x8000_0008, "worse__Q"),
        ])
        .collect();

    let failures = validate_symbols(&entries);
    assert_eq!(failures.len(), 2);
    assert_eq!(failures[0].address, 0x8000_0008);
    assert_eq!(failures[1].address, 0x8010_0000);
    assert!(failures[1]
        .to_string()
        .starts_with("Failed to demangle symbol at 0x80100000: "));

    let matches = search_symbols(&entries, "talkballoon");
    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|e| e.symbol.starts_with("__vt__")));

    assert_eq!(
        map_name("__dt__18MorphItemNeoTeresaFv"),
        "MorphItemNeoTeresa::~MorphItemNeoTeresa(void)"
    );
    assert_eq!(
        map_name("setAllAnimFrameAtEnd__2MRFPC9LiveActorPCc"),
        "MR::setAllAnimFrameAtEnd(constLiveActor*,constchar*)"
    );
}
