//! Node tags for the AML syntax tree.
//!
//! One variant per symbol of the AML grammar, in the order the grammar
//! defines them. Leaf nodes carry the matched bytes as payload; grouping
//! nodes have an empty payload and only children.

use serde::Serialize;

/// Tag carried by every node in the parsed forest.
///
/// The `Debug` rendering is the name used by dumps and JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    // Definition block header
    AmlCode,
    DefBlockHeader,
    TableSignature,
    TableLength,
    SpecCompliance,
    CheckSum,
    OemId,
    OemTableId,
    OemRevision,
    CreatorId,
    CreatorRevision,

    // Name objects
    RootChar,
    NameSeg,
    NameString,
    PrefixPath,
    NamePath,
    DualNamePath,
    MultiNamePath,
    SegCount,
    SimpleName,
    SuperName,
    NullName,
    Target,
    ComputationalData,

    // Data objects
    DataObject,
    DataRefObject,
    ByteConst,
    BytePrefix,
    WordConst,
    WordPrefix,
    DWordConst,
    DWordPrefix,
    QWordConst,
    QWordPrefix,
    String,
    StringPrefix,
    ConstObj,
    ByteList,
    ByteData,
    WordData,
    DWordData,
    QWordData,
    AsciiCharList,
    AsciiChar,
    NullChar,
    ZeroOp,
    OneOp,
    OnesOp,
    RevisionOp,

    // Package length
    PkgLength,
    PkgLeadByte,

    // Term objects
    Object,
    TermObj,
    TermList,
    TermArg,
    MethodInvocation,
    TermArgList,

    // Namespace modifier objects
    NameSpaceModifierObj,
    DefAlias,
    DefName,
    DefScope,

    // Named objects
    NamedObj,
    DefBankField,
    BankValue,
    FieldFlags,
    FieldList,
    NamedField,
    ReservedField,
    AccessField,
    AccessType,
    AccessAttrib,
    ConnectField,
    DefCreateBitField,
    CreateBitFieldOp,
    SourceBuff,
    BitIndex,
    DefCreateByteField,
    CreateByteFieldOp,
    ByteIndex,
    DefCreateDWordField,
    CreateDWordFieldOp,
    DefCreateField,
    CreateFieldOp,
    NumBits,
    DefCreateQWordField,
    CreateQWordFieldOp,
    DefCreateWordField,
    CreateWordFieldOp,
    DefDataRegion,
    DataRegionOp,
    DefDevice,
    DeviceOp,
    DefEvent,
    EventOp,
    DefExternal,
    ExternalOp,
    ObjectType,
    ArgumentCount,
    DefField,
    FieldOp,
    DefIndexField,
    IndexFieldOp,
    DefMethod,
    MethodOp,
    MethodFlags,
    DefMutex,
    MutexOp,
    SyncFlags,
    DefOpRegion,
    OpRegionOp,
    RegionSpace,
    RegionOffset,
    RegionLen,
    DefPowerRes,
    PowerResOp,
    SystemLevel,
    ResourceOrder,
    DefProcessor,
    ProcessorOp,
    ProcId,
    PblkAddr,
    PblkLen,
    DefThermalZone,
    ThermalZoneOp,
    ExtendedAccessField,
    ExtendedAccessAttrib,
    FieldElement,

    // Type 1 opcodes (statements)
    Type1Opcode,
    DefBreak,
    DefBreakPoint,
    DefContinue,
    DefElse,
    DefFatal,
    FatalOp,
    FatalType,
    FatalCode,
    FatalArg,
    DefIfElse,
    Predicate,
    DefLoad,
    LoadOp,
    DdbHandleObject,
    DefNoop,
    DefNotify,
    NotifyOp,
    NotifyObject,
    NotifyValue,
    DefRelease,
    ReleaseOp,
    MutexObject,
    DefReset,
    ResetOp,
    EventObject,
    DefReturn,
    ReturnOp,
    ArgObject,
    DefSignal,
    SignalOp,
    DefSleep,
    SleepOp,
    MsecTime,
    DefStall,
    StallOp,
    UsecTime,
    DefWhile,
    WhileOp,

    // Type 2 opcodes (expressions)
    Type2Opcode,
    Type6Opcode,
    DefAcquire,
    AcquireOp,
    Timeout,
    DefAdd,
    AddOp,
    Operand,
    DefAnd,
    AndOp,
    DefBuffer,
    BufferOp,
    BufferSize,
    DefConcat,
    ConcatOp,
    Data,
    DefConcatRes,
    ConcatResOp,
    BufData,
    DefCondRefOf,
    CondRefOfOp,
    DefCopyObject,
    CopyObjectOp,
    DefDecrement,
    DecrementOp,
    DefDerefOf,
    DerefOfOp,
    ObjReference,
    DefDivide,
    DivideOp,
    Dividend,
    Divisor,
    Remainder,
    Quotient,
    DefFindSetLeftBit,
    FindSetLeftBitOp,
    DefFindSetRightBit,
    FindSetRightBitOp,
    DefFromBcd,
    FromBcdOp,
    BcdValue,
    DefIncrement,
    IncrementOp,
    DefIndex,
    IndexOp,
    BuffPkgStrObj,
    IndexValue,
    DefLAnd,
    LAndOp,
    DefLEqual,
    LEqualOp,
    DefLGreater,
    LGreaterOp,
    DefLGreaterEqual,
    LGreaterEqualOp,
    DefLLess,
    LLessOp,
    DefLLessEqual,
    LLessEqualOp,
    DefLNot,
    LNotOp,
    DefLNotEqual,
    LNotEqualOp,
    DefLoadTable,
    LoadTableOp,
    DefLOr,
    LOrOp,
    DefMatch,
    MatchOp,
    SearchPkg,
    MatchOpcode,
    StartIndex,
    DefMid,
    MidOp,
    MidObj,
    DefMod,
    ModOp,
    DefMultiply,
    MultiplyOp,
    DefNAnd,
    NAndOp,
    DefNOr,
    NOrOp,
    DefNot,
    NotOp,
    DefObjectType,
    ObjectTypeOp,
    DefOr,
    OrOp,
    DefPackage,
    PackageOp,
    DefVarPackage,
    VarPackageOp,
    NumElements,
    VarNumElements,
    PackageElementList,
    PackageElement,
    DefRefOf,
    RefOfOp,
    DefShiftLeft,
    ShiftLeftOp,
    ShiftCount,
    DefShiftRight,
    ShiftRightOp,
    DefSizeOf,
    SizeOfOp,
    DefStore,
    StoreOp,
    DefSubtract,
    SubtractOp,
    DefTimer,
    TimerOp,
    DefToBcd,
    ToBcdOp,
    DefToBuffer,
    ToBufferOp,
    DefToDecimalString,
    ToDecimalStringOp,
    DefToHexString,
    ToHexStringOp,
    DefToInteger,
    ToIntegerOp,
    DefToString,
    LengthArg,
    ToStringOp,
    DefWait,
    WaitOp,
    DefXOr,
    XOrOp,

    // Arg, local, and debug objects
    ArgObj,
    Arg0Op,
    Arg1Op,
    Arg2Op,
    Arg3Op,
    Arg4Op,
    Arg5Op,
    Arg6Op,
    LocalObj,
    Local0Op,
    Local1Op,
    Local2Op,
    Local3Op,
    Local4Op,
    Local5Op,
    Local6Op,
    Local7Op,
    DebugObj,
    DebugOp,
}
