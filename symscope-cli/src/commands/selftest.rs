use anyhow::bail;
use serde::Serialize;
use symscope::demangle::demangle_or_original;

use crate::{
    app::GlobalOptions,
    output::{print_output, Align, TabWriter},
};

/// Known symbol / declaration pairs taken from real game symbol maps.
const CASES: &[(&str, &str)] = &[
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

#[derive(Debug, Serialize)]
struct SelftestCase {
    symbol: &'static str,
    expected: &'static str,
    actual: String,
    passed: bool,
}

pub fn run(opts: &GlobalOptions) -> anyhow::Result<()> {
    let results: Vec<SelftestCase> = CASES
        .iter()
        .map(|&(symbol, expected)| {
            let actual = demangle_or_original(symbol);
            SelftestCase {
                symbol,
                expected,
                passed: actual == expected,
                actual,
            }
        })
        .collect();

    print_output(&results, opts, |results| {
        let mut tw = TabWriter::new(&[
            ("Expected", Align::Left),
            ("Actual", Align::Left),
            ("Passed", Align::Left),
        ]);
        for case in results {
            tw.row([
                case.expected.to_string(),
                case.actual.clone(),
                case.passed.to_string(),
            ]);
        }
        tw.print()
    })?;

    let failed = results.iter().filter(|case| !case.passed).count();
    if failed > 0 {
        bail!("{failed} of {} self-test case(s) failed", results.len());
    }

    Ok(())
}
